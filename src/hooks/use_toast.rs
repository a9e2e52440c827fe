// ============================================================================
// USE TOAST HOOK - One transient notification at a time
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub key: String,
    pub kind: ToastKind,
    pub content: String,
    pub duration_seconds: u32,
}

impl Toast {
    pub fn success(key: &str, content: impl Into<String>) -> Self {
        Self::new(key, ToastKind::Success, content.into())
    }

    pub fn error(key: &str, content: impl Into<String>) -> Self {
        Self::new(key, ToastKind::Error, content.into())
    }

    fn new(key: &str, kind: ToastKind, content: String) -> Self {
        Self {
            key: key.to_string(),
            kind,
            content,
            duration_seconds: CONFIG.toast_duration_seconds,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseToastHandle {
    pub current: UseStateHandle<Option<Toast>>,
    pub open: Callback<Toast>,
    pub close: Callback<()>,
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let current = use_state(|| None::<Toast>);
    // Bumped on every open so an older timer cannot hide a newer toast
    let generation: Rc<RefCell<u64>> = use_mut_ref(|| 0);

    let open = {
        let current = current.clone();
        let generation = generation.clone();
        Callback::from(move |toast: Toast| {
            match toast.kind {
                ToastKind::Success => log::info!("🔔 [{}] {}", toast.key, toast.content),
                ToastKind::Error => log::warn!("🔔 [{}] {}", toast.key, toast.content),
            }

            let ticket = {
                let mut counter = generation.borrow_mut();
                *counter += 1;
                *counter
            };
            let millis = toast.duration_seconds.saturating_mul(1000);
            current.set(Some(toast));

            let current = current.clone();
            let generation = generation.clone();
            Timeout::new(millis, move || {
                if *generation.borrow() == ticket {
                    current.set(None);
                }
            })
            .forget();
        })
    };

    let close = {
        let current = current.clone();
        Callback::from(move |_| current.set(None))
    };

    UseToastHandle { current, open, close }
}
