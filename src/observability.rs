use biometrics::{Collector, Counter, Moments};

pub(crate) static CHAT_REQUESTS: Counter = Counter::new("wardline.client.chat_requests");
pub(crate) static CHAT_REQUEST_ERRORS: Counter = Counter::new("wardline.client.chat_request_errors");
pub(crate) static CHAT_REQUEST_DURATION: Moments =
    Moments::new("wardline.client.chat_request_duration_seconds");

pub(crate) static HELP_REQUESTS: Counter = Counter::new("wardline.client.help_requests");
pub(crate) static HELP_REQUEST_ERRORS: Counter = Counter::new("wardline.client.help_request_errors");

pub(crate) static MESSAGES_DROPPED: Counter = Counter::new("wardline.session.messages_dropped");
pub(crate) static EMERGENCY_ALERTS: Counter = Counter::new("wardline.session.emergency_alerts");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CHAT_REQUESTS);
    collector.register_counter(&CHAT_REQUEST_ERRORS);
    collector.register_moments(&CHAT_REQUEST_DURATION);

    collector.register_counter(&HELP_REQUESTS);
    collector.register_counter(&HELP_REQUEST_ERRORS);

    collector.register_counter(&MESSAGES_DROPPED);
    collector.register_counter(&EMERGENCY_ALERTS);
}
