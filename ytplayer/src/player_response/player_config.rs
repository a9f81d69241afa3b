use serde::{Deserialize, Serialize};

use crate::serde_impl::null_as_default;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub audio_config: AudioConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub exo_player_config: ExoplayerConfig,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub loudness_db: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub perceptual_loudness_db: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_per_format_loudness: bool,
}

/// Tunables upstream sends for the ExoPlayer engine of its Android app.
///
/// Nothing here is interpreted. The record is kept flat and in upstream's key order so it
/// re-serializes exactly as received.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExoplayerConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub use_exo_player: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_adaptive_bitrate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_initial_byte_rate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_duration_for_quality_increase_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_duration_for_quality_decrease_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_duration_to_retain_after_discard_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub low_watermark_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub high_watermark_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub low_pool_load: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub high_pool_load: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sufficient_bandwidth_overhead: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub buffer_chunk_size_kb: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub http_connect_timeout_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub http_read_timeout_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_audio_segments_per_fetch: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_video_segments_per_fetch: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_duration_for_playback_start_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_exoplayer_reuse: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_radio_type_for_initial_quality_selection: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub blacklist_format_on_error: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_bandaid_http_data_source: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub http_load_timeout_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub can_play_hd_drm: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub video_buffer_segment_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_buffer_segment_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub use_abrupt_splicing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub min_retry_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_chunks_needed_to_prefer_offline: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub seconds_to_max_aggressiveness: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_surfaceview_resize_workaround: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_vp9_if_thresholds_pass: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub match_quality_to_viewport_on_unfullscreen: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub low_audio_quality_conn_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_dash_for_live_streams: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_libvpx_video_track_renderer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub low_audio_quality_bandwidth_threshold_bps: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_variable_speed_playback: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub prefer_onesie_buffered_format: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_bandwidth_sample_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub use_dash_for_otf_and_completed_live_streams: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_cache_aware_video_format_evaluation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_live_dvr_for_dash_live_streams: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cronet_reset_timeout_on_redirects: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub emit_video_decoder_change_events: bool,
    /// Sent as a string by upstream, unlike the other timeouts.
    #[serde(deserialize_with = "null_as_default")]
    pub onesie_video_buffer_load_timeout_ms: String,
    #[serde(deserialize_with = "null_as_default")]
    pub onesie_video_buffer_read_timeout_ms: String,
    #[serde(deserialize_with = "null_as_default")]
    pub libvpx_enable_gl: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_vp9_encrypted_if_thresholds_pass: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_opus: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_predicted_buffer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_read_ahead_media_time_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub use_media_time_capped_load_control: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_cache_override_to_lower_qualities_within_range: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_dropping_undecoded_frames: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub min_duration_for_playback_restart_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_provided_bandwidth_header: String,
    #[serde(deserialize_with = "null_as_default")]
    pub live_only_peg_strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_redirector_host_fallback: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_highly_available_format_fallback_on_pcr: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub record_track_renderer_timing_events: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub min_errors_for_redirector_host_fallback: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub non_hardware_media_codec_names: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_vp9_if_in_hardware: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_vp9_encrypted_if_in_hardware: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_opus_med_as_low_quality_audio: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub min_errors_for_pcr_fallback: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub use_sticky_redirect_http_data_source: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub only_video_bandwidth: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_redirector_on_network_change: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_max_readahead_abr_threshold: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_check_directory_writability_once: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub predictor_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sliding_percentile: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sliding_window_size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_frame_drop_interval_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ignore_load_timeout_for_fallback: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub server_bwe_multiplier: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub drm_max_keyfetch_delay_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_resolution_for_white_noise: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub white_noise_render_effect_mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_libvpx_hdr: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_cache_aware_stream_selection: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_exo_cronet_data_source: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub white_noise_scale: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub white_noise_offset: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub prevent_video_frame_lagging_with_libvpx: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_media_codec_hdr: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_media_codec_sw_hdr: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub live_only_window_chunks: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bearer_min_duration_to_retain_after_discard_ms: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub force_widevine_l3: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_average_bitrate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_medialib_audio_track_renderer_for_live: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_exo_player_v2: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub log_media_request_events_to_csi: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub onesie_fix_non_zero_start_time_format_selection: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub live_only_readahead_step_size_chunks: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub live_only_buffer_health_half_life_seconds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub live_only_min_buffer_health_ratio: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub live_only_min_latency_to_seek_ratio: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub manifestless_partial_chunk_strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ignore_viewport_size_when_sticky: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_libvpx_fallback: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_libvpx_loop_filter: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_vpx_media_view: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hdr_min_screen_brightness: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hdr_max_screen_brightness_threshold: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub onesie_data_source_above_cache_data_source: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub http_nonplayer_load_timeout_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_video_segments_per_fetch_strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_video_duration_per_fetch_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_video_estimated_load_duration_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_server_clock_half_life: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_server_clock_strict_offset: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub min_read_ahead_media_time_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub read_ahead_growth_rate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub use_dynamic_read_ahead: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_yt_vod_media_source_for_v2: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_v2_gapless: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_live_head_time_millis: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_track_selection_with_updated_video_itags_for_exo_v2: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_allowable_time_before_media_time_update_sec: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_dynamic_hdr: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub v2_perform_early_stream_selection: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub v2_use_playback_stream_selection_result: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub v2_min_time_between_abr_reevaluation_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub avoid_reuse_playback_across_loadvideos: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_infinite_network_loading_retries: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub report_exo_player_state_on_transition: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub manifestless_sequence_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub use_live_head_window: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_dynamic_hdr_in_hardware: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ultralow_audio_quality_bandwidth_threshold_bps: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ignore_unneeded_seeks_to_live_head: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub drm_metrics_qoe_logging_fraction: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub use_time_series_buffer_prediction: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sliding_percentile_scalar: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keys_keep_upstream_spelling() {
        let json = serde_json::to_value(ExoplayerConfig::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 137);
        for key in [
            "useExoPlayer",
            "minDurationForPlaybackStartMs",
            "enableVp9IfThresholdsPass",
            "useExoPlayerV2",
            "v2PerformEarlyStreamSelection",
            "allowTrackSelectionWithUpdatedVideoItagsForExoV2",
            "bearerMinDurationToRetainAfterDiscardMs",
            "slidingPercentileScalar",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn partial_config() {
        let config: PlayerConfig = serde_json::from_value(json!({
            "audioConfig": {"loudnessDb": -1.6, "perceptualLoudnessDb": -15.6},
            "exoPlayerConfig": {
                "useExoPlayer": true,
                "lowPoolLoad": 0.8,
                "onesieVideoBufferLoadTimeoutMs": "5000",
                "lowAudioQualityConnTypes": ["CONN_2G", "CONN_UNKNOWN"],
                "bearerMinDurationToRetainAfterDiscardMs": [20000, 20000, 20000],
                "predictorType": "PREDICTOR_TYPE_SLIDING_PERCENTILE",
                "someKeyAddedLater": {"nested": true}
            }
        }))
        .unwrap();
        assert_eq!(config.audio_config.loudness_db, -1.6);
        assert!(!config.audio_config.enable_per_format_loudness);
        let exo = &config.exo_player_config;
        assert!(exo.use_exo_player);
        assert!(!exo.use_adaptive_bitrate);
        assert_eq!(exo.low_pool_load, 0.8);
        assert_eq!(exo.onesie_video_buffer_load_timeout_ms, "5000");
        assert_eq!(exo.low_audio_quality_conn_types, ["CONN_2G", "CONN_UNKNOWN"]);
        assert_eq!(exo.bearer_min_duration_to_retain_after_discard_ms, [20000_i64; 3]);
        assert_eq!(exo.max_initial_byte_rate, 0);
        assert!(exo.non_hardware_media_codec_names.is_empty());
    }

    #[test]
    fn mistyped_tunable_is_rejected() {
        let result = serde_json::from_value::<ExoplayerConfig>(json!({"httpReadTimeoutMs": "8000"}));
        assert!(result.is_err());
    }
}
