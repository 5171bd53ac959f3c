//! LADSPA RDF vocabulary
//!
//! Namespace and predicate URI constants plus the fixed lookup tables that
//! map plugin-class, port-type and unit URIs onto the bitmask values used by
//! the C descriptor API. Only this hard-coded vocabulary is understood;
//! unrecognized names are logged and mapped to zero, never rejected.

use tracing::warn;

// ============================================================================
// Namespaces
// ============================================================================

pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
pub const NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NS_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const NS_LADSPA: &str = "http://ladspa.org/ontology#";

// ============================================================================
// Predicates
// ============================================================================

pub const DC_CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
pub const DC_RIGHTS: &str = "http://purl.org/dc/elements/1.1/rights";
pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
pub const RDF_VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub const LADSPA_FOR_PORT: &str = "http://ladspa.org/ontology#forPort";
pub const LADSPA_HAS_LABEL: &str = "http://ladspa.org/ontology#hasLabel";
pub const LADSPA_HAS_POINT: &str = "http://ladspa.org/ontology#hasPoint";
pub const LADSPA_HAS_PORT: &str = "http://ladspa.org/ontology#hasPort";
pub const LADSPA_HAS_PORT_VALUE: &str = "http://ladspa.org/ontology#hasPortValue";
pub const LADSPA_HAS_SCALE: &str = "http://ladspa.org/ontology#hasScale";
pub const LADSPA_HAS_SETTING: &str = "http://ladspa.org/ontology#hasSetting";
pub const LADSPA_HAS_UNIT: &str = "http://ladspa.org/ontology#hasUnit";

/// Obsolete predicate found in old plugin bundles; rewritten to
/// [`LADSPA_HAS_UNIT`] before classification.
pub const LADSPA_HAS_UNITS: &str = "http://ladspa.org/ontology#hasUnits";

/// Extension-marker subjects that describe capabilities already handled
/// natively; triples with these subjects carry no extractable facts.
pub const LADSPA_NOTCH_PLUGIN: &str = "http://ladspa.org/ontology#NotchPlugin";
pub const LADSPA_SPECTRAL_PLUGIN: &str = "http://ladspa.org/ontology#SpectralPlugin";

// ============================================================================
// Unit types
// ============================================================================

pub const UNIT_DB: u32 = 0x01;
pub const UNIT_COEF: u32 = 0x02;
pub const UNIT_HZ: u32 = 0x04;
pub const UNIT_S: u32 = 0x08;
pub const UNIT_MS: u32 = 0x10;
pub const UNIT_MIN: u32 = 0x20;

pub const UNIT_CLASS_AMPLITUDE: u32 = UNIT_DB | UNIT_COEF;
pub const UNIT_CLASS_FREQUENCY: u32 = UNIT_HZ;
pub const UNIT_CLASS_TIME: u32 = UNIT_S | UNIT_MS | UNIT_MIN;

// ============================================================================
// Port types (official LADSPA API values)
// ============================================================================

pub const PORT_INPUT: u32 = 0x1;
pub const PORT_OUTPUT: u32 = 0x2;
pub const PORT_CONTROL: u32 = 0x4;
pub const PORT_AUDIO: u32 = 0x8;

// ============================================================================
// Port hints
//
// Track which optional port fields were explicitly supplied, as opposed to
// merely holding their zero default.
// ============================================================================

pub const PORT_HINT_UNIT: u32 = 0x1;
pub const PORT_HINT_DEFAULT: u32 = 0x2;
pub const PORT_HINT_LABEL: u32 = 0x4;

// ============================================================================
// Plugin classes
// ============================================================================

pub const CLASS_UTILITY: u64 = 0x000000001;
pub const CLASS_GENERATOR: u64 = 0x000000002;
pub const CLASS_SIMULATOR: u64 = 0x000000004;
pub const CLASS_OSCILLATOR: u64 = 0x000000008;
pub const CLASS_TIME: u64 = 0x000000010;
pub const CLASS_DELAY: u64 = 0x000000020;
pub const CLASS_PHASER: u64 = 0x000000040;
pub const CLASS_FLANGER: u64 = 0x000000080;
pub const CLASS_CHORUS: u64 = 0x000000100;
pub const CLASS_REVERB: u64 = 0x000000200;
pub const CLASS_FREQUENCY: u64 = 0x000000400;
pub const CLASS_FREQUENCY_METER: u64 = 0x000000800;
pub const CLASS_FILTER: u64 = 0x000001000;
pub const CLASS_LOWPASS: u64 = 0x000002000;
pub const CLASS_HIGHPASS: u64 = 0x000004000;
pub const CLASS_BANDPASS: u64 = 0x000008000;
pub const CLASS_COMB: u64 = 0x000010000;
pub const CLASS_ALLPASS: u64 = 0x000020000;
pub const CLASS_EQ: u64 = 0x000040000;
pub const CLASS_PARAEQ: u64 = 0x000080000;
pub const CLASS_MULTIEQ: u64 = 0x000100000;
pub const CLASS_AMPLITUDE: u64 = 0x000200000;
pub const CLASS_PITCH: u64 = 0x000400000;
pub const CLASS_AMPLIFIER: u64 = 0x000800000;
pub const CLASS_WAVESHAPER: u64 = 0x001000000;
pub const CLASS_MODULATOR: u64 = 0x002000000;
pub const CLASS_DISTORTION: u64 = 0x004000000;
pub const CLASS_DYNAMICS: u64 = 0x008000000;
pub const CLASS_COMPRESSOR: u64 = 0x010000000;
pub const CLASS_EXPANDER: u64 = 0x020000000;
pub const CLASS_LIMITER: u64 = 0x040000000;
pub const CLASS_GATE: u64 = 0x080000000;
pub const CLASS_SPECTRAL: u64 = 0x100000000;
pub const CLASS_NOTCH: u64 = 0x200000000;

pub const GROUP_DYNAMICS: u64 =
    CLASS_DYNAMICS | CLASS_COMPRESSOR | CLASS_EXPANDER | CLASS_LIMITER | CLASS_GATE;
pub const GROUP_AMPLITUDE: u64 = CLASS_AMPLITUDE
    | CLASS_AMPLIFIER
    | CLASS_WAVESHAPER
    | CLASS_MODULATOR
    | CLASS_DISTORTION
    | GROUP_DYNAMICS;
pub const GROUP_EQ: u64 = CLASS_EQ | CLASS_PARAEQ | CLASS_MULTIEQ;
pub const GROUP_FILTER: u64 = CLASS_FILTER
    | CLASS_LOWPASS
    | CLASS_HIGHPASS
    | CLASS_BANDPASS
    | CLASS_COMB
    | CLASS_ALLPASS
    | CLASS_NOTCH;
pub const GROUP_FREQUENCY: u64 =
    CLASS_FREQUENCY | CLASS_FREQUENCY_METER | GROUP_FILTER | GROUP_EQ | CLASS_PITCH;
pub const GROUP_SIMULATOR: u64 = CLASS_SIMULATOR | CLASS_REVERB;
pub const GROUP_TIME: u64 =
    CLASS_TIME | CLASS_DELAY | CLASS_PHASER | CLASS_FLANGER | CLASS_CHORUS | CLASS_REVERB;
pub const GROUP_GENERATOR: u64 = CLASS_GENERATOR | CLASS_OSCILLATOR;

// ============================================================================
// URI -> flag lookups
// ============================================================================

/// Strip the `ladspa:` namespace prefix from a URI, if present.
fn local_name(uri: &str) -> &str {
    uri.strip_prefix(NS_LADSPA).unwrap_or(uri)
}

/// Map a plugin-class URI onto its descriptor bitflag.
///
/// `MixerPlugin` is a legacy alias for the EQ class. Unknown class names are
/// logged and mapped to zero.
pub fn plugin_class_flag(uri: &str) -> u64 {
    match local_name(uri) {
        "Plugin" => 0,
        "UtilityPlugin" => CLASS_UTILITY,
        "GeneratorPlugin" => CLASS_GENERATOR,
        "SimulatorPlugin" => CLASS_SIMULATOR,
        "OscillatorPlugin" => CLASS_OSCILLATOR,
        "TimePlugin" => CLASS_TIME,
        "DelayPlugin" => CLASS_DELAY,
        "PhaserPlugin" => CLASS_PHASER,
        "FlangerPlugin" => CLASS_FLANGER,
        "ChorusPlugin" => CLASS_CHORUS,
        "ReverbPlugin" => CLASS_REVERB,
        "FrequencyPlugin" => CLASS_FREQUENCY,
        "FrequencyMeterPlugin" => CLASS_FREQUENCY_METER,
        "FilterPlugin" => CLASS_FILTER,
        "LowpassPlugin" => CLASS_LOWPASS,
        "HighpassPlugin" => CLASS_HIGHPASS,
        "BandpassPlugin" => CLASS_BANDPASS,
        "CombPlugin" => CLASS_COMB,
        "AllpassPlugin" => CLASS_ALLPASS,
        "EQPlugin" => CLASS_EQ,
        "ParaEQPlugin" => CLASS_PARAEQ,
        "MultiEQPlugin" => CLASS_MULTIEQ,
        "AmplitudePlugin" => CLASS_AMPLITUDE,
        "PitchPlugin" => CLASS_PITCH,
        "AmplifierPlugin" => CLASS_AMPLIFIER,
        "WaveshaperPlugin" => CLASS_WAVESHAPER,
        "ModulatorPlugin" => CLASS_MODULATOR,
        "DistortionPlugin" => CLASS_DISTORTION,
        "DynamicsPlugin" => CLASS_DYNAMICS,
        "CompressorPlugin" => CLASS_COMPRESSOR,
        "ExpanderPlugin" => CLASS_EXPANDER,
        "LimiterPlugin" => CLASS_LIMITER,
        "GatePlugin" => CLASS_GATE,
        "SpectralPlugin" => CLASS_SPECTRAL,
        "NotchPlugin" => CLASS_NOTCH,
        // Legacy alias found in old bundles
        "MixerPlugin" => CLASS_EQ,
        other => {
            warn!("Unknown plugin class '{}'", other);
            0
        }
    }
}

/// Map a port-type URI onto its descriptor bitflag.
///
/// Combined forms accept both word orders (`ControlInputPort` and
/// `InputControlPort` are equivalent). Unknown names are logged and mapped
/// to zero.
pub fn port_type_flag(uri: &str) -> u32 {
    match local_name(uri) {
        "Port" => 0,
        "ControlPort" => PORT_CONTROL,
        "AudioPort" => PORT_AUDIO,
        "InputPort" => PORT_INPUT,
        "OutputPort" => PORT_OUTPUT,
        "ControlInputPort" | "InputControlPort" => PORT_CONTROL | PORT_INPUT,
        "ControlOutputPort" | "OutputControlPort" => PORT_CONTROL | PORT_OUTPUT,
        "AudioInputPort" | "InputAudioPort" => PORT_AUDIO | PORT_INPUT,
        "AudioOutputPort" | "OutputAudioPort" => PORT_AUDIO | PORT_OUTPUT,
        other => {
            warn!("Unknown port type '{}'", other);
            0
        }
    }
}

/// Map a unit URI onto its descriptor bitflag.
///
/// The generic category names (`Unit`, `Units`, `AmplitudeUnits`,
/// `FrequencyUnits`, `TimeUnits`) carry no unit information and map to zero
/// without a warning.
pub fn unit_flag(uri: &str) -> u32 {
    match local_name(uri) {
        "Unit" | "Units" | "AmplitudeUnits" | "FrequencyUnits" | "TimeUnits" => 0,
        "dB" => UNIT_DB,
        "coef" => UNIT_COEF,
        "Hz" => UNIT_HZ,
        "seconds" => UNIT_S,
        "milliseconds" => UNIT_MS,
        "minutes" => UNIT_MIN,
        other => {
            warn!("Unknown unit type '{}'", other);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_class_lookup() {
        assert_eq!(
            plugin_class_flag("http://ladspa.org/ontology#ReverbPlugin"),
            CLASS_REVERB
        );
        assert_eq!(plugin_class_flag("http://ladspa.org/ontology#Plugin"), 0);
        assert_eq!(plugin_class_flag("http://ladspa.org/ontology#NoSuchPlugin"), 0);
    }

    #[test]
    fn mixer_plugin_is_eq_alias() {
        assert_eq!(
            plugin_class_flag("http://ladspa.org/ontology#MixerPlugin"),
            CLASS_EQ
        );
    }

    #[test]
    fn port_type_word_order_equivalence() {
        let a = port_type_flag("http://ladspa.org/ontology#AudioInputPort");
        let b = port_type_flag("http://ladspa.org/ontology#InputAudioPort");
        assert_eq!(a, b);
        assert_eq!(a, PORT_AUDIO | PORT_INPUT);

        let c = port_type_flag("http://ladspa.org/ontology#ControlOutputPort");
        let d = port_type_flag("http://ladspa.org/ontology#OutputControlPort");
        assert_eq!(c, d);
        assert_eq!(c, PORT_CONTROL | PORT_OUTPUT);
    }

    #[test]
    fn unit_lookup() {
        assert_eq!(unit_flag("http://ladspa.org/ontology#dB"), UNIT_DB);
        assert_eq!(unit_flag("http://ladspa.org/ontology#milliseconds"), UNIT_MS);
        // Generic category names carry no unit
        assert_eq!(unit_flag("http://ladspa.org/ontology#Units"), 0);
        assert_eq!(unit_flag("http://ladspa.org/ontology#AmplitudeUnits"), 0);
        // Unknown
        assert_eq!(unit_flag("http://ladspa.org/ontology#parsecs"), 0);
    }
}
