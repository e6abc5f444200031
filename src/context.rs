//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast severity, each with its own auto-dismiss window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Success => 2000,
            ToastKind::Error => 5000,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// The single active notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Sequence number so a stale dismiss timer cannot clear a newer toast
    seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active toast, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Active toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Trigger to reload records from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload records from the store - write
    set_reload_trigger: WriteSignal<u32>,
    /// Monotonic counter backing `Toast::seq`
    toast_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toast_seq: StoredValue::new(0),
        }
    }

    /// Trigger a reload of the record list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast, replacing any active one, and schedule its dismissal
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let seq = self.toast_seq.get_value() + 1;
        self.toast_seq.set_value(seq);

        self.set_toast.set(Some(Toast {
            message: message.into(),
            kind,
            seq,
        }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(kind.duration_ms()).await;
            // Only dismiss if no newer toast has replaced this one
            if ctx.toast.get_untracked().map(|t| t.seq) == Some(seq) {
                ctx.set_toast.set(None);
            }
        });
    }

    /// Dismiss the active toast immediately
    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}
