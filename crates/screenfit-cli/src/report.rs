//! Serializable command results and their text rendering.

use std::fmt::Write as _;

use screenfit_core::{
    baseline, fallback_chain, font_multiplier, DeviceCategory, DeviceGroup, Orientation,
    Overrides, ScreenContext, CLASSIFICATION_RULES,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub width: f64,
    pub height: f64,
    pub category: DeviceCategory,
    pub group: DeviceGroup,
    pub orientation: Orientation,
}

impl ClassifyReport {
    pub fn new(ctx: &ScreenContext) -> Self {
        let vp = ctx.viewport();
        Self {
            width: vp.width,
            height: vp.height,
            category: ctx.category(),
            group: ctx.group(),
            orientation: ctx.orientation(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}x{}: {} ({}, {})",
            self.width, self.height, self.category, self.group, self.orientation
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ScaledValue {
    pub kind: &'static str,
    pub input: f64,
    pub output: f64,
}

#[derive(Debug, Serialize)]
pub struct ScaleReport {
    pub category: DeviceCategory,
    pub baseline: [f64; 2],
    pub font_multiplier: f64,
    pub values: Vec<ScaledValue>,
}

impl ScaleReport {
    pub fn new(ctx: &ScreenContext, horizontal: &[f64], vertical: &[f64], font: &[f64]) -> Self {
        let mut values = Vec::with_capacity(horizontal.len() + vertical.len() + font.len());
        values.extend(horizontal.iter().map(|&v| ScaledValue {
            kind: "width",
            input: v,
            output: ctx.scale_width(v),
        }));
        values.extend(vertical.iter().map(|&v| ScaledValue {
            kind: "height",
            input: v,
            output: ctx.scale_height(v),
        }));
        values.extend(font.iter().map(|&v| ScaledValue {
            kind: "font",
            input: v,
            output: ctx.scale_font(v),
        }));
        let base = ctx.baseline();
        Self {
            category: ctx.category(),
            baseline: [base.width, base.height],
            font_multiplier: ctx.font_multiplier(),
            values,
        }
    }

    pub fn render(&self, precision: usize) -> String {
        let mut out = format!(
            "{} (baseline {}x{}, font x{:.2})",
            self.category, self.baseline[0], self.baseline[1], self.font_multiplier
        );
        for v in &self.values {
            let _ = write!(
                out,
                "\n  {:<6} {:>10.p$} -> {:.p$}",
                v.kind,
                v.input,
                v.output,
                p = precision
            );
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub category: DeviceCategory,
    pub chain: &'static [DeviceCategory],
    /// Category that supplied the value; `None` means the fallback was used.
    pub source: Option<DeviceCategory>,
    pub value: String,
}

impl ResolveReport {
    pub fn new(ctx: &ScreenContext, overrides: &Overrides<String>) -> Self {
        let category = ctx.category();
        Self {
            category,
            chain: fallback_chain(category),
            source: overrides.resolve_source(category),
            value: ctx.resolve(overrides).clone(),
        }
    }

    pub fn render(&self) -> String {
        let source = self
            .source
            .map_or_else(|| "fallback".to_string(), |c| c.to_string());
        format!("{} ({}: {})", self.value, self.category, source)
    }
}

#[derive(Debug, Serialize)]
pub struct RuleRow {
    pub category: DeviceCategory,
    pub condition: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: DeviceCategory,
    pub group: DeviceGroup,
    pub baseline: [f64; 2],
    pub font_multiplier: f64,
    pub chain: &'static [DeviceCategory],
}

#[derive(Debug, Serialize)]
pub struct TableReport {
    pub rules: Vec<RuleRow>,
    pub categories: Vec<CategoryRow>,
}

impl Default for TableReport {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReport {
    pub fn new() -> Self {
        let rules = CLASSIFICATION_RULES
            .iter()
            .map(|r| RuleRow {
                category: r.category,
                condition: r.condition,
            })
            .collect();
        let categories = DeviceCategory::ALL
            .into_iter()
            .map(|category| {
                let base = baseline(category);
                CategoryRow {
                    category,
                    group: category.group(),
                    baseline: [base.width, base.height],
                    font_multiplier: font_multiplier(category),
                    chain: fallback_chain(category),
                }
            })
            .collect();
        Self { rules, categories }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Rules (first match wins):");
        for (i, rule) in self.rules.iter().enumerate() {
            let _ = write!(out, "\n  {}. {:<14} {}", i + 1, rule.category, rule.condition);
        }
        out.push_str("\n\nCategories:");
        for row in &self.categories {
            let chain: Vec<&str> = row.chain.iter().map(DeviceCategory::as_str).collect();
            let _ = write!(
                out,
                "\n  {:<14} {:<8} {:>4}x{:<5} font x{:.2}  {}",
                row.category,
                row.group,
                row.baseline[0],
                row.baseline[1],
                row.font_multiplier,
                chain.join(" -> ")
            );
        }
        out
    }
}
