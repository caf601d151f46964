use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    AppServices, Catalog, LookupService, ServicesConfig, StatsService, StrokeOrderService,
};
use storage::repository::Storage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{SessionRoot, use_session_handle, use_session_handle_with};
use crate::vm::{PromptKind, SessionIntent, apply_intent};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn stats(&self) -> Arc<StatsService> {
        self.services.stats()
    }

    fn stroke_order(&self) -> Arc<StrokeOrderService> {
        self.services.stroke_order()
    }

    fn lookup(&self) -> Arc<LookupService> {
        self.services.lookup()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    /// Intents replayed on the controller before the first render.
    script: Vec<SessionIntent>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SessionHarness(props: ViewHarnessProps) -> Element {
    let ctx = props.context.clone();
    use_context_provider(|| ctx.clone());
    let script = props.script.clone();
    let init_ctx = ctx.clone();
    let handle = use_session_handle_with(&ctx, move || {
        let mut controller = init_ctx.new_controller();
        for intent in script {
            apply_intent(&mut controller, intent).expect("scripted intent");
        }
        controller
    });
    use_context_provider(|| handle);
    rsx! { SessionRoot {} }
}

/// Callbacks registered by `HandleHarness` so tests can drive the live
/// session handle from outside the component tree.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    set_prompt: Rc<RefCell<Option<Callback<PromptKind>>>>,
    stroke_glyph: Rc<RefCell<Option<Callback<(), Option<char>>>>>,
}

impl HarnessHandles {
    pub fn dispatch(&self, intent: SessionIntent) {
        let dispatch = self.dispatch.borrow().clone().expect("dispatch registered");
        dispatch.call(intent);
    }

    pub fn set_prompt(&self, kind: PromptKind) {
        let set_prompt = self.set_prompt.borrow().clone().expect("prompt registered");
        set_prompt.call(kind);
    }

    /// Glyph the stroke-order slot is currently bound to.
    pub fn stroke_glyph(&self) -> Option<char> {
        let stroke_glyph = self.stroke_glyph.borrow().clone().expect("stroke registered");
        stroke_glyph.call(())
    }
}

#[derive(Props, Clone)]
struct HandleHarnessProps {
    context: AppContext,
    handles: HarnessHandles,
}

impl PartialEq for HandleHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HandleHarness(props: HandleHarnessProps) -> Element {
    let ctx = props.context.clone();
    use_context_provider(|| ctx.clone());
    let handle = use_session_handle(&ctx);
    use_context_provider(|| handle);

    let dispatch = use_callback(move |intent: SessionIntent| handle.dispatch(intent));
    let set_prompt = use_callback(move |kind: PromptKind| handle.set_prompt(kind));
    let stroke_glyph = use_callback(move |_: ()| handle.stroke().peek().glyph());
    let handles = props.handles.clone();
    use_hook(move || {
        *handles.dispatch.borrow_mut() = Some(dispatch);
        *handles.set_prompt.borrow_mut() = Some(set_prompt);
        *handles.stroke_glyph.borrow_mut() = Some(stroke_glyph);
    });

    rsx! { SessionRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(script: Vec<SessionIntent>) -> ViewHarness {
    setup_view_harness_with_storage(Storage::in_memory(), script).await
}

pub async fn setup_view_harness_with_storage(
    storage: Storage,
    script: Vec<SessionIntent>,
) -> ViewHarness {
    let services = AppServices::new(storage, &ServicesConfig::offline())
        .await
        .expect("services");
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services: services.clone(),
    });
    let context = build_app_context(&app);

    let dom = VirtualDom::new_with_props(SessionHarness, ViewHarnessProps { context, script });

    ViewHarness { dom, services }
}

/// Harness whose intents go through `SessionHandle::dispatch`.
pub async fn setup_handle_harness(storage: Storage) -> (ViewHarness, HarnessHandles) {
    let services = AppServices::new(storage, &ServicesConfig::offline())
        .await
        .expect("services");
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services: services.clone(),
    });
    let context = build_app_context(&app);
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        HandleHarness,
        HandleHarnessProps {
            context,
            handles: handles.clone(),
        },
    );

    (ViewHarness { dom, services }, handles)
}
