//! The codec entry point.

use notikit_core::{
    DeliveredNotification, NotificationActionDescriptor, NotificationCategoryDescriptor,
    NotificationRequestDescriptor, NotificationResponse, Result,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::category;
use crate::config::{CodecConfig, PlatformCapabilities};
use crate::delivered;
use crate::fields::as_object;
use crate::request;

/// Converts between the external mapping and native notification objects.
///
/// The platform capabilities are fixed when the codec is built; every call
/// afterwards is a pure function of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationCodec {
    capabilities: PlatformCapabilities,
}

impl NotificationCodec {
    /// Build a codec for the given capabilities
    #[must_use]
    pub fn new(capabilities: PlatformCapabilities) -> Self {
        info!(
            os_version = capabilities.os_version(),
            profile = %capabilities.profile(),
            "notification codec ready"
        );
        Self { capabilities }
    }

    /// Build a codec from configuration
    #[must_use]
    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.capabilities())
    }

    /// Capabilities the codec was built with
    #[must_use]
    pub const fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    /// Decode a notification request
    pub fn decode_request(&self, input: &Map<String, Value>) -> Result<NotificationRequestDescriptor> {
        request::decode_request(input, self.capabilities)
    }

    /// Decode a notification request from any JSON value
    pub fn decode_request_value(&self, input: &Value) -> Result<NotificationRequestDescriptor> {
        self.decode_request(as_object("request", input)?)
    }

    /// Encode a notification request
    #[must_use]
    pub fn encode_request(&self, request: &NotificationRequestDescriptor) -> Map<String, Value> {
        request::encode_request(request, self.capabilities)
    }

    /// Decode a notification category
    pub fn decode_category(&self, input: &Map<String, Value>) -> Result<NotificationCategoryDescriptor> {
        category::decode_category(input)
    }

    /// Decode a list of categories
    pub fn decode_categories(&self, input: &[Value]) -> Result<Vec<NotificationCategoryDescriptor>> {
        category::decode_categories(input)
    }

    /// Decode a notification action
    pub fn decode_action(&self, input: &Map<String, Value>) -> Result<NotificationActionDescriptor> {
        category::decode_action(input)
    }

    /// Encode a delivered notification
    #[must_use]
    pub fn encode_delivered_notification(
        &self,
        notification: &DeliveredNotification,
    ) -> Map<String, Value> {
        delivered::encode_delivered_notification(notification, self.capabilities)
    }

    /// Encode a notification response
    #[must_use]
    pub fn encode_response(&self, response: &NotificationResponse) -> Map<String, Value> {
        delivered::encode_response(response, self.capabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlatformConfig, PlatformProfile};
    use notikit_core::{CodecError, InterruptionLevel};
    use serde_json::json;

    #[test]
    fn test_codec_from_config() {
        let config = CodecConfig {
            platform: PlatformConfig { os_version: 14 },
        };
        let codec = NotificationCodec::from_config(&config);
        assert_eq!(codec.capabilities().profile(), PlatformProfile::Baseline);
    }

    #[test]
    fn test_decode_request_value_requires_object() {
        let codec = NotificationCodec::default();
        let err = codec.decode_request_value(&json!(["abc"])).unwrap_err();
        assert_eq!(err, CodecError::invalid_field("request", "expected an object, found array"));

        let request = codec
            .decode_request_value(&json!({"identifier": "abc", "interruptionLevel": 2}))
            .unwrap();
        assert_eq!(request.interruption_level, InterruptionLevel::TimeSensitive);
    }

    #[test]
    fn test_encode_then_decode_through_codec() {
        let codec = NotificationCodec::default();
        let request = codec
            .decode_request_value(&json!({
                "id": "r1",
                "title": "Hello",
                "timeInterval": 120,
                "repeats": true,
                "userInfo": {"k": "v"}
            }))
            .unwrap();
        let encoded = codec.encode_request(&request);
        assert_eq!(encoded["identifier"], "r1");
        assert_eq!(codec.decode_request(&encoded).unwrap(), request);
    }
}
