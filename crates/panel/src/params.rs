//! The five Lissajous plot parameters and their request mapping.

use serde::Serialize;

/// One of the five plot parameters, each driven by a range control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Param {
    /// Frequency ratio, X axis
    L,
    /// Frequency ratio, Z axis
    M,
    /// Frequency ratio, Y axis
    N,
    /// Phase shift φ, degrees
    Phi,
    /// Phase shift ψ, degrees
    Psi,
}

impl Param {
    /// All parameters, in panel order
    pub const ALL: [Self; 5] = [Self::L, Self::M, Self::N, Self::Phi, Self::Psi];

    /// Key used in the request body
    pub const fn key(self) -> &'static str {
        match self {
            Self::L => "l",
            Self::M => "m",
            Self::N => "n",
            Self::Phi => "phi",
            Self::Psi => "psi",
        }
    }

    /// DOM id of the range control
    pub fn slider_id(self) -> String {
        format!("{}-slider", self.key())
    }

    /// DOM id of the adjacent value label
    pub fn label_id(self) -> String {
        format!("{}-value", self.key())
    }

    /// Phase shifts are displayed in degrees
    pub const fn is_phase(self) -> bool {
        matches!(self, Self::Phi | Self::Psi)
    }

    /// Initial control value, matching the injected markup
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::L => "8",
            Self::M => "9",
            Self::N => "10",
            Self::Phi | Self::Psi => "45",
        }
    }

    /// Label text for a raw control value
    pub fn display_value(self, raw: &str) -> String {
        if self.is_phase() {
            format!("{raw}°")
        } else {
            raw.to_string()
        }
    }
}

/// Flat field-to-value mapping POSTed to the rendering backend.
///
/// Values travel as the controls' native string representation; the
/// backend owns numeric interpretation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PlotParams {
    pub l: String,
    pub m: String,
    pub n: String,
    pub phi: String,
    pub psi: String,
}

impl PlotParams {
    /// Current value of one parameter
    pub fn get(&self, param: Param) -> &str {
        match param {
            Param::L => &self.l,
            Param::M => &self.m,
            Param::N => &self.n,
            Param::Phi => &self.phi,
            Param::Psi => &self.psi,
        }
    }

    /// Overwrite one parameter with a control's current value
    pub fn set(&mut self, param: Param, value: String) {
        match param {
            Param::L => self.l = value,
            Param::M => self.m = value,
            Param::N => self.n = value,
            Param::Phi => self.phi = value,
            Param::Psi => self.psi = value,
        }
    }
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            l: Param::L.default_value().to_owned(),
            m: Param::M.default_value().to_owned(),
            n: Param::N.default_value().to_owned(),
            phi: Param::Phi.default_value().to_owned(),
            psi: Param::Psi.default_value().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_labels_get_a_degree_suffix() {
        assert_eq!(Param::Phi.display_value("45"), "45°");
        assert_eq!(Param::Psi.display_value("360"), "360°");
        assert_eq!(Param::L.display_value("8"), "8");
        assert_eq!(Param::M.display_value("9"), "9");
        assert_eq!(Param::N.display_value("10"), "10");
    }

    #[test]
    fn control_ids_follow_the_naming_convention() {
        assert_eq!(Param::L.slider_id(), "l-slider");
        assert_eq!(Param::L.label_id(), "l-value");
        assert_eq!(Param::Phi.slider_id(), "phi-slider");
        assert_eq!(Param::Psi.label_id(), "psi-value");
    }

    #[test]
    fn request_body_has_exactly_the_wire_keys() {
        let body = serde_json::to_value(PlotParams::default()).unwrap();
        let obj = body.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["l", "m", "n", "phi", "psi"]);
        assert!(obj.values().all(serde_json::Value::is_string));
    }

    #[test]
    fn defaults_match_the_initial_control_values() {
        let params = PlotParams::default();
        for param in Param::ALL {
            assert_eq!(params.get(param), param.default_value());
        }
    }

    #[test]
    fn set_updates_only_the_addressed_field() {
        let mut params = PlotParams::default();
        params.set(Param::Phi, "90".to_string());
        assert_eq!(params.phi, "90");
        assert_eq!(params.psi, "45");
    }
}
