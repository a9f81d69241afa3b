use serde_json::{json, Value};
use ytplayer::{parse_player_response, Error, PlayerResponse};

const FULL: &str = include_str!("data/player_response.json");

#[test]
fn full_response_round_trip() {
    let first = parse_player_response(FULL.as_bytes()).unwrap();
    let encoded = serde_json::to_vec(&first).unwrap();
    let second = parse_player_response(&encoded).unwrap();
    assert_eq!(first, second);

    // every field of the fixture is set, so nothing may be lost or added on the way
    let original: Value = serde_json::from_str(FULL).unwrap();
    let reencoded: Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(original, reencoded);
}

#[test]
fn full_response_fields() {
    let response = parse_player_response(FULL.as_bytes()).unwrap();
    assert!(response.playability_status.is_ok());
    assert!(response.playability_status.playable_in_embed);

    let streaming_data = &response.streaming_data;
    assert_eq!(streaming_data.expires_in_seconds, "21540");
    assert_eq!(streaming_data.formats.len(), 1);
    let format = &streaming_data.formats[0];
    assert_eq!(format.itag, 18);
    assert_eq!(format.audio_sample_rate, "44100");
    assert_eq!(format.init_range.end, "631");
    let itags: Vec<i64> = streaming_data.adaptive_formats.iter().map(|f| f.itag).collect();
    assert_eq!(itags, [137_i64, 248]);

    let tracking = &response.playback_tracking;
    assert!(tracking.qoe_url.base_url.starts_with("https://s.youtube.com/api/stats/qoe"));
    assert_eq!(tracking.ptracking_url.headers.len(), 3);
    assert_eq!(tracking.videostats_playback_url.headers[1].header_type, "VISITOR_ID");

    let details = &response.video_details;
    assert_eq!(details.video_id, "abc123");
    assert_eq!(details.keywords, ["test", "video"]);
    assert_eq!(details.thumbnail.largest().unwrap().width, 480);
    assert!(details.is_live_content);

    let config = &response.player_config;
    assert_eq!(config.audio_config.perceptual_loudness_db, -15.639999);
    assert_eq!(config.exo_player_config.max_initial_byte_rate, 1002);
    assert_eq!(
        config.exo_player_config.predictor_type,
        "PREDICTOR_TYPE_SLIDING_PERCENTILE"
    );
}

#[test]
fn every_exoplayer_key_is_emitted() {
    let original: Value = serde_json::from_str(FULL).unwrap();
    let keys = original["playerConfig"]["exoPlayerConfig"].as_object().unwrap();
    assert_eq!(keys.len(), 137);

    let encoded = serde_json::to_value(PlayerResponse::default()).unwrap();
    let emitted = encoded["playerConfig"]["exoPlayerConfig"].as_object().unwrap();
    assert_eq!(emitted.len(), keys.len());
    for key in keys.keys() {
        assert!(emitted.contains_key(key), "missing {key}");
    }
}

#[test]
fn optional_fields_stay_omitted() {
    let body = json!({
        "streamingData": {
            "expiresInSeconds": "21540",
            "formats": [{"itag": 18, "url": "https://example.invalid/18"}],
            "adaptiveFormats": [{"itag": 140, "url": "https://example.invalid/140"}]
        }
    });
    let response = parse_player_response(body.to_string().as_bytes()).unwrap();
    let format = &response.streaming_data.formats[0];
    assert_eq!(format.audio_quality, "");
    assert_eq!(format.audio_channels, 0);
    assert!(!format.high_replication);
    assert!(format.color_info.is_empty());
    assert!(response.streaming_data.adaptive_formats[0].index_range.is_empty());

    let encoded = serde_json::to_value(&response).unwrap();
    let format = encoded["streamingData"]["formats"][0].as_object().unwrap();
    for key in [
        "audioQuality",
        "audioSampleRate",
        "audioChannels",
        "highReplication",
        "colorInfo",
        "initRange",
        "indexRange",
    ] {
        assert!(!format.contains_key(key), "{key} should be omitted");
    }
    assert_eq!(format["bitrate"], 0);
    assert_eq!(format["contentLength"], "");

    let adaptive = encoded["streamingData"]["adaptiveFormats"][0].as_object().unwrap();
    for key in ["colorInfo", "initRange", "indexRange"] {
        assert!(!adaptive.contains_key(key), "{key} should be omitted");
    }
    assert_eq!(adaptive["approxDurationMs"], "");
}

#[test]
fn mismatched_field_fails_whole_response() {
    let mut body: Value = serde_json::from_str(FULL).unwrap();
    body["videoDetails"]["lengthSeconds"] = json!(212);
    let error = parse_player_response(body.to_string().as_bytes()).unwrap_err();
    assert!(matches!(error, Error::Decode(_)));

    let mut body: Value = serde_json::from_str(FULL).unwrap();
    body["playerConfig"]["exoPlayerConfig"]["useExoPlayer"] = json!("true");
    let error = parse_player_response(body.to_string().as_bytes()).unwrap_err();
    assert!(matches!(error, Error::Decode(_)));
}
