use serde::{Deserialize, Serialize};

use crate::serde_impl::{is_default, null_as_default};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamingData {
    /// How long the signed urls stay valid, kept in upstream's string encoding.
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in_seconds: String,
    /// Streams with both an audio and a video track.
    #[serde(deserialize_with = "null_as_default")]
    pub formats: Vec<Format>,
    /// Video-only and audio-only streams.
    #[serde(deserialize_with = "null_as_default")]
    pub adaptive_formats: Vec<AdaptiveFormat>,
}

/// An entry of [`StreamingData::formats`].
///
/// `lastModified`, `contentLength` and `approxDurationMs` can exceed what a JSON number
/// safely holds, and upstream sends them as strings, so they stay strings here.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct Format {
    #[serde(deserialize_with = "null_as_default")]
    pub itag: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bitrate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_length: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fps: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub projection_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub average_bitrate: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub audio_quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub approx_duration_ms: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub audio_sample_rate: String,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(deserialize_with = "null_as_default")]
    pub audio_channels: i64,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(deserialize_with = "null_as_default")]
    pub high_replication: bool,
    #[serde(skip_serializing_if = "ColorInfo::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub color_info: ColorInfo,
    #[serde(skip_serializing_if = "Range::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub init_range: Range,
    #[serde(skip_serializing_if = "Range::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub index_range: Range,
}

/// An entry of [`StreamingData::adaptive_formats`].
///
/// Kept apart from [`Format`]: upstream sends a different set of optional keys, in a
/// different order, for the adaptive list.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct AdaptiveFormat {
    #[serde(deserialize_with = "null_as_default")]
    pub itag: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bitrate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(skip_serializing_if = "Range::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub init_range: Range,
    #[serde(skip_serializing_if = "Range::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub index_range: Range,
    #[serde(deserialize_with = "null_as_default")]
    pub last_modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_length: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fps: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub projection_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub average_bitrate: i64,
    #[serde(skip_serializing_if = "ColorInfo::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub color_info: ColorInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub approx_duration_ms: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorInfo {
    /// i.e. `COLOR_PRIMARIES_BT709`
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub primaries: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub transfer_characteristics: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub matrix_coefficients: String,
}

impl ColorInfo {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primaries.is_empty()
            && self.transfer_characteristics.is_empty()
            && self.matrix_coefficients.is_empty()
    }
}

/// A byte range inside the stream, with both bounds in upstream's string encoding.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Range {
    #[serde(deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end: String,
}

impl Range {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const AUDIO_FORMAT: &str = r#"{
        "itag": 18,
        "url": "https://rr3---sn-4g5e6nsz.googlevideo.com/videoplayback?expire=1700000000&itag=18",
        "mimeType": "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\"",
        "bitrate": 503753,
        "width": 640,
        "height": 360,
        "lastModified": "1694044346735488",
        "contentLength": "13372640",
        "quality": "medium",
        "fps": 25,
        "qualityLabel": "360p",
        "projectionType": "RECTANGULAR",
        "averageBitrate": 503620,
        "audioQuality": "AUDIO_QUALITY_LOW",
        "approxDurationMs": "212427",
        "audioSampleRate": "44100",
        "audioChannels": 2
    }"#;

    #[test]
    fn absent_optionals_are_skipped() {
        let format: Format = serde_json::from_str(AUDIO_FORMAT).unwrap();
        assert_eq!(format.audio_channels, 2);
        assert!(format.color_info.is_empty());
        assert!(format.init_range.is_empty());

        let json = serde_json::to_value(&format).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["audioSampleRate"], "44100");
        assert!(!object.contains_key("colorInfo"));
        assert!(!object.contains_key("initRange"));
        assert!(!object.contains_key("indexRange"));
        assert!(!object.contains_key("highReplication"));
    }

    #[test]
    fn mandatory_fields_are_emitted_when_zero() {
        let json = serde_json::to_value(Format::default()).unwrap();
        assert_eq!(
            json,
            json!({
                "itag": 0,
                "url": "",
                "mimeType": "",
                "bitrate": 0,
                "width": 0,
                "height": 0,
                "lastModified": "",
                "contentLength": "",
                "quality": "",
                "fps": 0,
                "qualityLabel": "",
                "projectionType": "",
                "averageBitrate": 0,
                "approxDurationMs": ""
            })
        );
    }

    #[test]
    fn adaptive_format_keeps_its_own_shape() {
        let format: AdaptiveFormat = serde_json::from_value(json!({
            "itag": 248,
            "mimeType": "video/webm; codecs=\"vp9\"",
            "initRange": {"start": "0", "end": "219"},
            "indexRange": {"start": "220", "end": "1335"},
            "colorInfo": {
                "primaries": "COLOR_PRIMARIES_BT709",
                "transferCharacteristics": "COLOR_TRANSFER_CHARACTERISTICS_BT709"
            },
            "audioQuality": "AUDIO_QUALITY_MEDIUM"
        }))
        .unwrap();
        assert_eq!(format.index_range.end, "1335");
        assert_eq!(format.color_info.matrix_coefficients, "");

        let json = serde_json::to_value(&format).unwrap();
        assert_eq!(json["initRange"], json!({"start": "0", "end": "219"}));
        assert_eq!(
            json["colorInfo"],
            json!({
                "primaries": "COLOR_PRIMARIES_BT709",
                "transferCharacteristics": "COLOR_TRANSFER_CHARACTERISTICS_BT709"
            })
        );
        assert!(json.get("audioQuality").is_none());
    }

    #[test]
    fn order_is_preserved() {
        let data: StreamingData = serde_json::from_value(json!({
            "expiresInSeconds": "21540",
            "adaptiveFormats": [{"itag": 137}, {"itag": 140}, {"itag": 22}]
        }))
        .unwrap();
        let itags: Vec<i64> = data.adaptive_formats.iter().map(|f| f.itag).collect();
        assert_eq!(itags, [137_i64, 140, 22]);
        assert_eq!(data.expires_in_seconds, "21540");
        assert!(data.formats.is_empty());
    }

    #[test]
    fn fractional_itag_is_rejected() {
        assert!(serde_json::from_value::<Format>(json!({"itag": 18.5})).is_err());
        assert!(serde_json::from_value::<Format>(json!({"contentLength": 13372640})).is_err());
    }
}
