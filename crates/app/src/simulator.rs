//! Request dispatch against the registry, including hook execution.

use serde_json::Value;

use picomock_domain::error::{BodyError, PicoMockError};
use picomock_domain::merge;
use picomock_domain::method::Method;
use picomock_domain::telemetry::{
    ADC_CPU_TEMPERATURE, ADC_SYSTEM_VOLTAGE, CPU_TEMPERATURE_RANGE, SYSTEM_VOLTAGE_RANGE, Uptime,
};

use crate::ports::NoiseSource;
use crate::registry::{Descriptor, Hook, MethodTable, Registry};

/// What the dispatcher decided about a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A simulated endpoint answered.
    Reply(Reply),
    /// The path is simulated but not this method.
    MethodNotAllowed,
    /// The path is not simulated; hand the request to the real chain.
    PassThrough,
}

/// A synthesized response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

/// The simulation service: owns the registry and the noise source.
pub struct Simulator<N> {
    registry: Registry,
    noise: N,
}

impl<N: NoiseSource> Simulator<N> {
    /// Create a new simulator over a fully built registry.
    pub fn new(registry: Registry, noise: N) -> Self {
        Self { registry, noise }
    }

    /// The registry this simulator answers from.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decide how to answer a request.
    ///
    /// Misses never touch fixture state. On a hit, the descriptor's hook
    /// (if any) runs before the body snapshot is taken, so the reply
    /// reflects the mutation it just caused.
    ///
    /// # Errors
    ///
    /// Returns [`PicoMockError::Body`] when a body-consuming hook runs
    /// without a body, and [`PicoMockError::Fixture`] when a fixture body
    /// fails to (de)serialize inside a hook.
    pub fn dispatch(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Outcome, PicoMockError> {
        let Some(table) = self.registry.table(path) else {
            tracing::debug!(path, "path not simulated, passing through");
            return Ok(Outcome::PassThrough);
        };
        let Some(descriptor) = table.descriptor(method) else {
            tracing::debug!(path, %method, "method not registered for simulated path");
            return Ok(Outcome::MethodNotAllowed);
        };

        if let Some(hook) = descriptor.hook() {
            self.run_hook(table, descriptor, hook, body)?;
        }

        Ok(Outcome::Reply(Reply {
            status: descriptor.status(),
            body: descriptor.snapshot(),
        }))
    }

    fn run_hook(
        &self,
        table: &MethodTable,
        own: &Descriptor,
        hook: Hook,
        body: Option<&Value>,
    ) -> Result<(), PicoMockError> {
        match hook {
            Hook::SettingsPatch => {
                let patch = body.ok_or(BodyError::Empty)?;
                if let Some(target) = table.descriptor(Method::Get) {
                    target.update(|current| merge::apply_partial(current, patch));
                }
                Ok(())
            }
            Hook::TelemetryTick => own.try_update(|current| advance_telemetry(current, &self.noise)),
        }
    }
}

/// Advance the uptime counters and re-sample the jittering ADC channels.
fn advance_telemetry<N: NoiseSource>(body: &mut Value, noise: &N) -> Result<(), PicoMockError> {
    if let Some(slot) = body.get_mut("uptime") {
        let mut uptime: Uptime = serde_json::from_value(slot.clone())?;
        uptime.advance();
        *slot = serde_json::to_value(uptime)?;
    }
    resample(body, ADC_SYSTEM_VOLTAGE, SYSTEM_VOLTAGE_RANGE, noise);
    resample(body, ADC_CPU_TEMPERATURE, CPU_TEMPERATURE_RANGE, noise);
    Ok(())
}

fn resample<N: NoiseSource>(body: &mut Value, channel: usize, (min, max): (f64, f64), noise: &N) {
    let Some(slot) = body.pointer_mut(&format!("/adc/{channel}/value")) else {
        return;
    };
    if let Some(number) = serde_json::Number::from_f64(noise.sample(min, max)) {
        *slot = Value::Number(number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ABOUT_PATH, SETTINGS_PATH, STATS_PATH, default_registry};
    use picomock_domain::telemetry::TICK_STEP;
    use serde_json::json;

    /// Noise source that always returns the midpoint of the range.
    struct MidpointNoise;

    impl NoiseSource for MidpointNoise {
        fn sample(&self, min: f64, max: f64) -> f64 {
            f64::midpoint(min, max)
        }
    }

    fn simulator() -> Simulator<MidpointNoise> {
        Simulator::new(default_registry().unwrap(), MidpointNoise)
    }

    fn reply(outcome: Outcome) -> Reply {
        match outcome {
            Outcome::Reply(reply) => reply,
            other => panic!("expected a reply, got {other:?}"),
        }
    }

    fn get(sim: &Simulator<MidpointNoise>, path: &str) -> Reply {
        reply(sim.dispatch(path, Method::Get, None).unwrap())
    }

    #[test]
    fn should_pass_through_unknown_paths_without_touching_state() {
        let sim = simulator();
        let settings_before = sim
            .registry()
            .table(SETTINGS_PATH)
            .unwrap()
            .descriptor(Method::Get)
            .unwrap()
            .snapshot();

        let outcome = sim.dispatch("/api/unknown", Method::Get, None).unwrap();
        assert_eq!(outcome, Outcome::PassThrough);

        let settings_after = sim
            .registry()
            .table(SETTINGS_PATH)
            .unwrap()
            .descriptor(Method::Get)
            .unwrap()
            .snapshot();
        assert_eq!(settings_before, settings_after);
    }

    #[test]
    fn should_answer_method_miss_with_method_not_allowed() {
        let sim = simulator();
        let outcome = sim.dispatch(SETTINGS_PATH, Method::Delete, None).unwrap();
        assert_eq!(outcome, Outcome::MethodNotAllowed);
    }

    #[test]
    fn should_not_mutate_state_on_method_miss() {
        let sim = simulator();
        let before = get(&sim, ABOUT_PATH).body;
        let _ = sim.dispatch(ABOUT_PATH, Method::Post, Some(&json!({"version": "tampered"})));
        assert_eq!(get(&sim, ABOUT_PATH).body, before);
    }

    #[test]
    fn should_serve_canonical_settings_on_first_get() {
        let sim = simulator();
        let reply = get(&sim, SETTINGS_PATH);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["led_mode"], json!(2));
        assert_eq!(reply.body["wifi_settings"]["telnet_port"], json!(23));
    }

    #[test]
    fn should_apply_settings_patch_and_acknowledge() {
        let sim = simulator();
        let outcome = sim
            .dispatch(SETTINGS_PATH, Method::Post, Some(&json!({"led_mode": 1})))
            .unwrap();
        assert_eq!(reply(outcome).body, json!({"status": "ok"}));

        let after = get(&sim, SETTINGS_PATH).body;
        assert_eq!(after["led_mode"], json!(1));
        assert_eq!(after["echo"], json!(true));
    }

    #[test]
    fn should_ignore_unknown_settings_keys() {
        let sim = simulator();
        let before = get(&sim, SETTINGS_PATH).body;
        sim.dispatch(SETTINGS_PATH, Method::Post, Some(&json!({"bogus": true})))
            .unwrap();
        assert_eq!(get(&sim, SETTINGS_PATH).body, before);
    }

    #[test]
    fn should_reject_settings_patch_without_body() {
        let sim = simulator();
        let result = sim.dispatch(SETTINGS_PATH, Method::Post, None);
        assert!(matches!(
            result,
            Err(PicoMockError::Body(BodyError::Empty))
        ));
    }

    #[test]
    fn should_advance_ticks_on_every_stats_get() {
        let sim = simulator();
        let first = get(&sim, STATS_PATH).body["uptime"]["ticks"]
            .as_u64()
            .unwrap();
        let second = get(&sim, STATS_PATH).body["uptime"]["ticks"]
            .as_u64()
            .unwrap();
        assert_eq!(second, first + TICK_STEP);
    }

    #[test]
    fn should_resample_designated_adc_channels() {
        let sim = simulator();
        let body = get(&sim, STATS_PATH).body;
        // MidpointNoise pins the jittering channels to their range midpoints.
        assert_eq!(body["adc"][3]["value"], json!(3.25));
        assert_eq!(body["adc"][4]["value"], json!(50.0));
    }

    #[test]
    fn should_leave_other_adc_channels_untouched() {
        let sim = simulator();
        let first = get(&sim, STATS_PATH).body;
        let second = get(&sim, STATS_PATH).body;
        assert_eq!(first["adc"][0], second["adc"][0]);
        assert_eq!(first["adc"][1], second["adc"][1]);
        assert_eq!(first["adc"][2], second["adc"][2]);
    }

    #[test]
    fn should_serve_about_unchanged_across_requests() {
        let sim = simulator();
        let first = get(&sim, ABOUT_PATH).body;
        let second = get(&sim, ABOUT_PATH).body;
        assert_eq!(first, second);
        assert_eq!(first["board"], json!("RP2350, Pico 2 W"));
    }

    #[test]
    fn should_roll_seconds_into_minutes_across_sixty_gets() {
        let sim = simulator();
        let start = get(&sim, STATS_PATH).body["uptime"].clone();
        for _ in 0..59 {
            get(&sim, STATS_PATH);
        }
        let end = get(&sim, STATS_PATH).body["uptime"].clone();

        let minutes = |v: &Value| v["minutes"].as_u64().unwrap();
        let seconds = |v: &Value| v["seconds"].as_u64().unwrap();
        assert_eq!(minutes(&end), minutes(&start) + 1);
        assert_eq!(seconds(&end), seconds(&start));
        assert!(seconds(&end) < 60);
    }
}
