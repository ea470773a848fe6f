use std::collections::HashMap;

/// ## Host call bridge
///
/// Everything a program can reach beyond the built-in operators: named
/// callables taking positional numeric arguments, and readable numeric
/// properties backing the reserved identifiers. `None` from either side
/// is the "not found or failed" outcome; the interpreter folds it into 0.

pub trait Host {
    fn call(&mut self, name: &str, args: &[f64]) -> Option<f64>;
    fn fetch(&self, name: &str) -> Option<f64>;
}

type HostFn = Box<dyn FnMut(&[f64]) -> Option<f64>>;
type HostProp = Box<dyn Fn() -> f64>;

/// Table-backed `Host`. Built once at session start, then handed to the
/// runtime.
#[derive(Default)]
pub struct HostTable {
    calls: HashMap<String, HostFn>,
    props: HashMap<String, HostProp>,
}

impl HostTable {
    pub fn new() -> HostTable {
        HostTable::default()
    }

    pub fn bind<F>(mut self, name: &str, func: F) -> HostTable
    where
        F: FnMut(&[f64]) -> Option<f64> + 'static,
    {
        self.calls.insert(name.to_string(), Box::new(func));
        self
    }

    pub fn property<F>(mut self, name: &str, get: F) -> HostTable
    where
        F: Fn() -> f64 + 'static,
    {
        self.props.insert(name.to_string(), Box::new(get));
        self
    }

    pub fn constant(self, name: &str, value: f64) -> HostTable {
        self.property(name, move || value)
    }
}

impl Host for HostTable {
    fn call(&mut self, name: &str, args: &[f64]) -> Option<f64> {
        match self.calls.get_mut(name) {
            Some(func) => func(args),
            None => None,
        }
    }

    fn fetch(&self, name: &str) -> Option<f64> {
        self.props.get(name).map(|get| get())
    }
}
