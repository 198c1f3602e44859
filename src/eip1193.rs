//! js-sys bridge to the provider object injected at `window.gatewallet`.

use std::sync::Arc;

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use log::debug;
use serde_json::Value;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{
    provider::{EventListener, InjectedProvider, ProviderEvent},
    rpc::{RpcError, CODE_INTERNAL_ERROR, CODE_INVALID_PARAMS, CODE_METHOD_NOT_FOUND, CODE_PARSE_ERROR},
};

/// Name of the global slot the Gatewallet extension injects into.
pub const GATEWALLET_SLOT: &str = "gatewallet";

/// An injected EIP-1193 provider living on the page's global scope.
pub struct WindowProvider {
    inner: JsValue,
}

impl WindowProvider {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }

    fn get(&self, key: &str) -> Option<JsValue> {
        Reflect::get(&self.inner, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn function(&self, key: &str) -> Option<Function> {
        self.get(key).and_then(|value| value.dyn_into().ok())
    }
}

/// Reads whatever occupies the `window.gatewallet` slot. `None` outside a
/// browser context or when no wallet injected itself.
pub fn window_gatewallet() -> Option<Arc<dyn InjectedProvider>> {
    let slot = Reflect::get(&js_sys::global(), &JsValue::from_str(GATEWALLET_SLOT)).ok()?;
    if slot.is_undefined() || slot.is_null() {
        return None;
    }
    Some(Arc::new(WindowProvider::new(slot)))
}

fn js_error(value: JsValue) -> RpcError {
    let code = Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64)
        .unwrap_or(CODE_INTERNAL_ERROR);
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    RpcError::new(code, message)
}

#[async_trait(?Send)]
impl InjectedProvider for WindowProvider {
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let request = self
            .function("request")
            .ok_or_else(|| RpcError::new(CODE_METHOD_NOT_FOUND, "provider exposes no request"))?;

        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(js_error)?;
        if let Some(params) = params {
            let params = serde_wasm_bindgen::to_value(&params)
                .map_err(|error| RpcError::new(CODE_INVALID_PARAMS, error.to_string()))?;
            Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(js_error)?;
        }

        let pending = Promise::resolve(&request.call1(&self.inner, &args).map_err(js_error)?);
        let result = JsFuture::from(pending).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(result)
            .map_err(|error| RpcError::new(CODE_PARSE_ERROR, error.to_string()))
    }

    fn is_web3_wallet(&self) -> bool {
        self.get("isWeb3Wallet").map(|flag| flag.is_truthy()).unwrap_or(false)
    }

    fn detected_name(&self) -> Option<String> {
        self.get("name").and_then(|name| name.as_string())
    }

    fn supports_subscriptions(&self) -> bool {
        self.function("on").is_some()
    }

    fn on(&self, event: ProviderEvent, listener: EventListener) {
        let Some(on) = self.function("on") else { return };
        let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
            let payload = serde_wasm_bindgen::from_value(payload).unwrap_or(Value::Null);
            listener(payload);
        });
        if let Err(error) =
            on.call2(&self.inner, &JsValue::from_str(event.as_str()), callback.as_ref().unchecked_ref())
        {
            debug!("subscription to {} failed: {error:?}", event.as_str());
        }
        // The wallet keeps invoking the handler for the rest of the page
        // session, so the closure must outlive this call.
        callback.forget();
    }

    fn providers(&self) -> Option<Vec<Arc<dyn InjectedProvider>>> {
        let list: Array = self.get("providers")?.dyn_into().ok()?;
        Some(
            list.iter()
                .map(|entry| Arc::new(WindowProvider::new(entry)) as Arc<dyn InjectedProvider>)
                .collect(),
        )
    }
}
