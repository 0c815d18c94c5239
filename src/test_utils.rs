pub mod test_display;
pub mod test_registry;
pub mod test_timers;

use {
    crate::{
        bindings::Bindings,
        callback::Callback,
        config::BindingsConfig,
        test_utils::{
            test_codec::TestCodec, test_display::TestDisplay, test_registry::TestRegistry,
            test_timers::TestTimers,
        },
    },
    simplelog::{LevelFilter, TestLogger},
    std::{cell::RefCell, rc::Rc},
};

pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, simplelog::Config::default());
}

pub struct Harness {
    pub display: Rc<TestDisplay>,
    pub clients: Rc<TestRegistry>,
    pub timers: Rc<TestTimers>,
    pub bindings: Rc<Bindings>,
}

impl Harness {
    pub fn new(num_screens: usize) -> Self {
        Self::with_config(num_screens, &BindingsConfig::default())
    }

    pub fn with_config(num_screens: usize, config: &BindingsConfig) -> Self {
        init_logger();
        let display = Rc::new(TestDisplay::new(num_screens));
        let clients = Rc::new(TestRegistry::new(num_screens));
        let timers = Rc::new(TestTimers::default());
        let bindings = Bindings::with_config(
            display.clone(),
            clients.clone(),
            Rc::new(TestCodec::default()),
            timers.clone(),
            config,
        );
        Self {
            display,
            clients,
            timers,
            bindings,
        }
    }
}

/// Collects the payloads a callback was invoked with.
pub struct Recorder<T> {
    pub calls: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            calls: Default::default(),
        }
    }

    pub fn callback(&self) -> Callback<T> {
        let calls = self.calls.clone();
        Callback::new(move |data: &T| calls.borrow_mut().push(data.clone()))
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn take(&self) -> Vec<T> {
        self.calls.take()
    }
}

/// Returns a callback that appends `tag` to `log` when invoked.
pub fn tagged<T: 'static>(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Callback<T> {
    let log = log.clone();
    Callback::new(move |_: &T| log.borrow_mut().push(tag))
}
