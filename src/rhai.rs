use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rhai::{Dynamic, Engine as RhaiEngine, EvalAltResult, NativeCallContext, Position};

use crate::pool::CaseMode;
use crate::sampler::StringSampler;
use crate::Error;

pub type SharedSampler = Arc<Mutex<StringSampler<StdRng>>>;

/// Longest string a script may ask for.
pub const MAX_SCRIPT_STRING: usize = 1 << 20;

/// A rhai engine with the string generators registered.
///
/// Scripts call `random_alpha(len)`, `random_alpha(len, mode)`,
/// `random_numeric_string(len)`, `random_alpha_numeric(len)` and
/// `random_alpha_numeric(len, mode)`. Mode tokens other than `"upper"` and
/// `"lower"` are treated as `"both"`.
pub struct ScriptEngine {
    engine: RhaiEngine,
    seed: u64,
}

impl ScriptEngine {
    /// Without a seed a random one is drawn, and logged so a run can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        log::debug!("Creating script engine with seed {}", seed);

        let mut engine = RhaiEngine::new();
        engine.set_max_string_size(MAX_SCRIPT_STRING);
        let sampler = Arc::new(Mutex::new(StringSampler::seeded(seed)));
        register_generators(&mut engine, sampler);

        ScriptEngine { engine, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn eval(&self, expression: &str) -> Result<String, Error> {
        log::debug!("Evaluating {}", expression);
        let value = self
            .engine
            .eval::<Dynamic>(expression)
            .map_err(|e: Box<EvalAltResult>| Error::Script(e.to_string()))?;
        Ok(value.to_string())
    }
}

/// Rejects lengths over the engine's string limit before anything is allocated.
fn check_length(context: &NativeCallContext, length: i64) -> Result<(), Box<EvalAltResult>> {
    let max = context.engine().max_string_size();
    if max > 0 && length > 0 && length as u64 > max as u64 {
        let msg = format!("Length of string ({} > {})", length, max);
        return Err(Box::new(EvalAltResult::ErrorDataTooLarge(msg, Position::NONE)));
    }
    Ok(())
}

pub fn register_generators(engine: &mut RhaiEngine, sampler: SharedSampler) {
    let state = sampler.clone();
    engine.register_fn(
        "random_alpha",
        move |context: NativeCallContext, length: i64| -> Result<String, Box<EvalAltResult>> {
            check_length(&context, length)?;
            Ok(state.lock().random_alpha(length, CaseMode::default()))
        },
    );

    let state = sampler.clone();
    engine.register_fn(
        "random_alpha",
        move |context: NativeCallContext, length: i64, mode: &str| -> Result<String, Box<EvalAltResult>> {
            check_length(&context, length)?;
            Ok(state.lock().random_alpha(length, CaseMode::from_token(mode)))
        },
    );

    let state = sampler.clone();
    engine.register_fn(
        "random_numeric_string",
        move |context: NativeCallContext, length: i64| -> Result<String, Box<EvalAltResult>> {
            check_length(&context, length)?;
            Ok(state.lock().random_numeric_string(length))
        },
    );

    let state = sampler.clone();
    engine.register_fn(
        "random_alpha_numeric",
        move |context: NativeCallContext, length: i64| -> Result<String, Box<EvalAltResult>> {
            check_length(&context, length)?;
            Ok(state.lock().random_alpha_numeric(length, CaseMode::default()))
        },
    );

    let state = sampler;
    engine.register_fn(
        "random_alpha_numeric",
        move |context: NativeCallContext, length: i64, mode: &str| -> Result<String, Box<EvalAltResult>> {
            check_length(&context, length)?;
            Ok(state.lock().random_alpha_numeric(length, CaseMode::from_token(mode)))
        },
    );
}
