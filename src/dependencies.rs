use std::{
    marker::PhantomData,
    sync::{Arc, Mutex},
};

use once_cell::sync::Lazy;

use crate::{config::Config, modal::ModalManager};

macro_rules! singleton {
    ($name:ident, $type:ty, $init:expr) => {
        static $name: Lazy<Singleton<$type>> =
            Lazy::new(|| Singleton(Arc::new(Mutex::new($init))));

        impl SingletonFor<$type> for Dependency<$type> {
            fn get() -> Singleton<$type> {
                (*$name).clone()
            }
        }
    };
}

/// Shared handle to a process-wide service instance.
pub struct Singleton<T>(Arc<Mutex<T>>);

impl<T> Clone for Singleton<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Singleton<T> {
    pub fn with_lock<R>(&self, op: impl FnOnce(&T) -> R) -> R {
        op(&self.0.lock().unwrap())
    }

    pub fn with_lock_mut<R>(&self, op: impl FnOnce(&mut T) -> R) -> R {
        op(&mut self.0.lock().unwrap())
    }
}

pub trait SingletonFor<T> {
    fn get() -> Singleton<T>;
}

pub struct Dependency<T>(PhantomData<T>);

singleton!(MODAL_MANAGER_INSTANCE, ModalManager, ModalManager::new());
singleton!(CONFIG_INSTANCE, Config, Config::load_or_default());
