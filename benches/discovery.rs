#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use directroute::manifest::{parse_manifest, ManifestFormat};
use directroute::{
    DefaultDirectRouteProvider, DefaultInlineConstraintResolver, DirectRouteProvider, RouteTable,
};
use std::hint::black_box;

fn example_manifest() -> &'static str {
    r#"
controllers:
  - name: Zoo
    type: zoo::AnimalsController
    prefix: zoo
    routes:
      - template: "animals"
      - template: "animals/{id:int}"
        order: 1
    actions:
      - name: Get
        routes:
          - template: "animals/{id:int:min(1)}"
            name: GetAnimal
          - template: "animals/by-name/{name:alpha:maxlength(32)}"
            style: legacy
      - name: Toy
        routes:
          - template: "animals/{id:int}/toys/{toy_id:guid}"
      - name: Section
        routes:
          - template: "{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}"
      - name: List
      - name: Create
      - name: Health
        declared_on: zoo::BaseController
        routes:
          - template: health
  - name: Inventory
    prefix: inventory
    actions:
      - name: PostBatch
        routes:
          - template: "{warehouse_id}/feeds/{feed_id}/items/{item_id}/batches/{batch_id:regex(^b-[0-9]+$)}"
            style: factory
      - name: Complex
        routes:
          - template: "complex/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{*rest}"
"#
}

fn bench_direct_routes(c: &mut Criterion) {
    let manifest = parse_manifest(example_manifest(), ManifestFormat::Yaml).unwrap();
    let registrations = manifest.registrations();
    let zoo = &registrations[0];

    c.bench_function("direct_routes_single_controller", |b| {
        b.iter(|| {
            let entries = DefaultDirectRouteProvider
                .direct_routes(
                    &zoo.controller,
                    &zoo.actions,
                    &DefaultInlineConstraintResolver,
                )
                .unwrap();
            black_box(entries);
        })
    });

    c.bench_function("route_table_build", |b| {
        b.iter(|| {
            let table = RouteTable::build(
                &registrations,
                &DefaultDirectRouteProvider,
                &DefaultInlineConstraintResolver,
            )
            .unwrap();
            black_box(table);
        })
    });
}

criterion_group!(benches, bench_direct_routes);
criterion_main!(benches);
