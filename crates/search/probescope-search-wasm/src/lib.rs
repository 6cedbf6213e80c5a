use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use probescope_search_core::{
    parse_search_request_json, Config, Engine, Inputs, Request, SearchResult, SessionId,
};

#[wasm_bindgen]
pub struct ProbescopeSearch {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl ProbescopeSearch {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new ProbescopeSearch({ step_ms: 200 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ProbescopeSearch, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate_basic()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(ProbescopeSearch {
            core: Engine::new(cfg),
        })
    }

    /// Run a search over a request object `{values, target, algorithm?}`
    /// (algorithm is the UI string tag, default "binary"). Returns the
    /// SearchResult as JSON: `{found_index, trace}`.
    #[wasm_bindgen(js_name = run_search)]
    pub fn run_search(&self, request: JsValue) -> Result<JsValue, JsError> {
        if jsvalue_is_undefined_or_null(&request) {
            return Err(JsError::new("run_search: request is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&request)
            .map_err(|e| JsError::new(&format!("run_search stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("run_search: stringify produced non-string"))?;
        let req = parse_search_request_json(&s)
            .map_err(|e| JsError::new(&format!("run_search parse error: {e}")))?;
        let result = self
            .core
            .run_search(&req.values, req.target, req.algorithm);
        swb::to_value(&result).map_err(|e| JsError::new(&format!("result error: {e}")))
    }

    /// Start playback of a SearchResult anchored at `entry_index` (the
    /// clicked element, or the located index for submit-driven search).
    /// Cancels any in-flight session first. Returns this tick's Outputs
    /// JSON, including the PlaybackStarted event carrying the new session
    /// id.
    pub fn start(
        &mut self,
        entry_index: u32,
        result: JsValue,
        array_len: u32,
    ) -> Result<JsValue, JsError> {
        let result: SearchResult = swb::from_value(result)
            .map_err(|e| JsError::new(&format!("start: result parse error: {e}")))?;
        let out = self.core.update(
            0.0,
            Inputs::one(Request::Start {
                entry_index: entry_index as usize,
                result,
                array_len: array_len as usize,
            }),
        );
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Cancel a session by id. Idempotent. Returns this tick's Outputs JSON.
    pub fn cancel(&mut self, session: u32) -> Result<JsValue, JsError> {
        let out = self.core.update(
            0.0,
            Inputs::one(Request::Cancel {
                session: SessionId(session),
            }),
        );
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Cancel any in-flight session and force every element back to base
    /// state. Valid with no session active. Returns this tick's Outputs
    /// JSON.
    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        let out = self.core.update(0.0, Inputs::one(Request::Reset));
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Step playback by dt_ms with inputs JSON (or undefined for none).
    /// Returns Outputs JSON.
    pub fn update(&mut self, dt_ms: f32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json)
                .map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out = self.core.update(dt_ms, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Id and state of the session currently occupying the surface, as
    /// JSON `[id, state]`, or undefined when idle.
    #[wasm_bindgen(js_name = session_state)]
    pub fn session_state(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.session_state())
            .map_err(|e| JsError::new(&format!("session state error: {e}")))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
