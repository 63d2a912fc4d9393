use serde::Deserialize;

/// Jagged edge appearance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub tooth_size: f64,
    pub line_width: f64,
    pub color: String,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self { tooth_size: 5.0, line_width: 2.0, color: "#f0f0f0".to_string() }
    }
}

impl EdgeStyle {
    /// How far content may sit past a viewport edge and still get an edge.
    pub fn tolerance(&self) -> f64 {
        self.tooth_size + self.line_width
    }
}

/// Horizontal gridline appearance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub color: String,
    pub line_width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self { color: "#f0f0f0".to_string(), line_width: 2.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DrawerTheme {
    pub edge: EdgeStyle,
    pub grid: GridStyle,
}

impl DrawerTheme {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r##"{"edge": {"tooth_size": 8.0}, "grid": {"color": "#ddd"}}"##;
        let theme = DrawerTheme::from_json(json).expect("valid theme");
        assert_eq!(theme.edge.tooth_size, 8.0);
        assert_eq!(theme.edge.line_width, 2.0);
        assert_eq!(theme.grid.color, "#ddd");
        assert_eq!(theme.grid.line_width, 2.0);
    }

    #[test]
    fn default_tolerance() {
        assert_eq!(DrawerTheme::default().edge.tolerance(), 7.0);
    }
}
