#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temp file with the given extension. The file is
    /// removed when the handle drops.
    pub fn create_temp_manifest(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("directroute_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_manifest(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_manifest(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_manifest(content, "toml")
    }
}

pub mod fixtures {
    use directroute::direct::{DirectRouteFactory, DirectRouteFactoryContext};
    use directroute::route::{RequestHandler, Route};
    use directroute::{
        ActionDescriptor, ControllerDescriptor, DirectRouteError, RouteAnnotation, RouteAttribute,
        RouteEntry, RoutePrefixAttribute,
    };
    use std::sync::Arc;

    pub const WIDGETS_TYPE: &str = "shop::WidgetsController";

    /// `Widgets` with `Get` routed at `{id}` and an unannotated `List`.
    pub fn widgets(
        controller: ControllerDescriptor,
    ) -> (Arc<ControllerDescriptor>, Vec<Arc<ActionDescriptor>>) {
        let controller = Arc::new(controller);
        let get = ActionDescriptor::new("Get", &controller)
            .with_annotation(RouteAttribute::new("{id}"));
        let list = ActionDescriptor::new("List", &controller);
        (controller, vec![Arc::new(get), Arc::new(list)])
    }

    pub fn widgets_controller() -> ControllerDescriptor {
        ControllerDescriptor::new("Widgets", WIDGETS_TYPE)
    }

    pub fn prefixed_widgets_controller(prefix: &str) -> ControllerDescriptor {
        widgets_controller().with_annotation(RoutePrefixAttribute::new(prefix))
    }

    pub fn action_names(entry: &RouteEntry) -> Vec<&str> {
        entry
            .route()
            .target_actions()
            .iter()
            .map(|a| a.name())
            .collect()
    }

    /// A factory that breaks the contract by producing nothing.
    #[derive(Debug)]
    pub struct NullFactory;

    impl DirectRouteFactory for NullFactory {
        fn create_route(
            &self,
            _context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            Ok(None)
        }
    }

    impl RouteAnnotation for NullFactory {
        fn as_direct_route_factory(&self) -> Option<&dyn DirectRouteFactory> {
            Some(self)
        }
    }

    /// A factory that assembles its route by hand with `Route::new`.
    #[derive(Debug)]
    pub struct ManualRouteFactory(pub &'static str);

    impl DirectRouteFactory for ManualRouteFactory {
        fn create_route(
            &self,
            context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            let route = Route::new(self.0, context.actions().to_vec());
            Ok(Some(RouteEntry::new(None, self.0, route)))
        }
    }

    impl RouteAnnotation for ManualRouteFactory {
        fn as_direct_route_factory(&self) -> Option<&dyn DirectRouteFactory> {
            Some(self)
        }
    }

    #[derive(Debug)]
    pub struct EchoHandler;

    impl RequestHandler for EchoHandler {
        fn name(&self) -> &str {
            "echo"
        }
    }

    /// A factory that attaches an external request handler.
    #[derive(Debug)]
    pub struct HandlerFactory;

    impl DirectRouteFactory for HandlerFactory {
        fn create_route(
            &self,
            context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            let route = Route::new("handled", context.actions().to_vec())
                .with_handler(Arc::new(EchoHandler));
            Ok(Some(RouteEntry::new(None, "handled", route)))
        }
    }

    impl RouteAnnotation for HandlerFactory {
        fn as_direct_route_factory(&self) -> Option<&dyn DirectRouteFactory> {
            Some(self)
        }
    }
}
