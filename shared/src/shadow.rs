// Layered box-shadow generation
//
// A soft shadow is faked by stacking three layers. Each matrix row holds the
// `x`, `y` and `blur` coefficients of one layer; every coefficient is scaled
// by the spread slider value.

/// Rows are layers, columns are `x`, `y`, `blur`.
pub type ShadowMatrix = [[f64; 3]; 3];

pub const DEFAULT_SHADOW_MATRIX: ShadowMatrix = [
    [0.0, 0.1, 0.2], // Contact shadow
    [0.0, 0.2, 0.8], // Mid-range penumbra
    [0.0, 1.0, 3.0], // Ambient spread
];

pub const DEFAULT_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.2)";

/// Scaled `px` offsets for every layer, formatted to two decimals.
pub fn shadow_offsets(spread: f64, matrix: &ShadowMatrix) -> [[String; 3]; 3] {
    matrix.map(|row| row.map(|coefficient| format!("{:.2}px", coefficient * spread)))
}

/// CSS `box-shadow` value: three `x y blur color` layers joined by `,`.
pub fn shadow_styles(spread: f64, color: &str, matrix: &ShadowMatrix) -> String {
    shadow_offsets(spread, matrix)
        .iter()
        .map(|offsets| format!("{} {color}", offsets.join(" ")))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn default_shadow_styles(spread: f64) -> String {
    shadow_styles(spread, DEFAULT_SHADOW_COLOR, &DEFAULT_SHADOW_MATRIX)
}

/// Matrix coefficients must be finite and non-negative to produce valid CSS.
pub fn is_valid_matrix(matrix: &ShadowMatrix) -> bool {
    matrix
        .iter()
        .flatten()
        .all(|coefficient| coefficient.is_finite() && *coefficient >= 0.0)
}
