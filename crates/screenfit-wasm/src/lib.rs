use screenfit_core::{classify as classify_size, ScaleKind, ScreenContext, ScreenError};
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Category name (camelCase) for a viewport size.
#[wasm_bindgen]
pub fn classify(width: f64, height: f64) -> String {
    classify_size(width, height).as_str().to_string()
}

/// Scale `value` for a viewport. `kind` must be `"width"`, `"height"` or
/// `"font"`; anything else throws.
#[wasm_bindgen]
pub fn scale(width: f64, height: f64, kind: &str, value: f64) -> Result<f64, JsError> {
    scale_value(width, height, kind, value).map_err(|e| JsError::new(&e.to_string()))
}

fn scale_value(width: f64, height: f64, kind: &str, value: f64) -> Result<f64, ScreenError> {
    let kind: ScaleKind = kind.parse()?;
    Ok(ScreenContext::from_size(width, height).scale(kind, value))
}

/// JSON description of a viewport: category, group, orientation, baseline
/// and font multiplier.
#[wasm_bindgen]
pub fn describe(width: f64, height: f64) -> String {
    let ctx = ScreenContext::from_size(width, height);
    let baseline = ctx.baseline();
    json!({
        "category": ctx.category(),
        "group": ctx.group(),
        "orientation": ctx.orientation(),
        "baseline": { "width": baseline.width, "height": baseline.height },
        "fontMultiplier": ctx.font_multiplier(),
    })
    .to_string()
}
