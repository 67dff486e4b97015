// WebAssembly bindings for a browser front end
use crate::config::Config;
use crate::convert::{self, ConvertError};
use crate::format::UnitFormatter;
use crate::session::Session;
use crate::units::{self, Category, Unit};
use wasm_bindgen::prelude::*;

fn to_js(e: ConvertError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_unit(name: &str) -> Result<Unit, JsValue> {
    units::lookup_unit(name).map_err(to_js)
}

fn parse_category(name: &str) -> Result<Category, JsValue> {
    name.parse::<Category>().map_err(to_js)
}

#[wasm_bindgen]
pub struct ConverterWasm {
    session: Session,
    formatter: UnitFormatter,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self {
            session: Session::default(),
            formatter: UnitFormatter::default(),
        }
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    /// Create a converter, optionally from TOML config contents
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<ConverterWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };

        Ok(Self {
            session: Session::new(&config),
            formatter: config.formatter(),
        })
    }

    /// Returns JSON array of category names
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        serde_json::to_string(Category::all())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize categories: {}", e)))
    }

    /// Returns JSON array of {id, symbol, name} for a category, in picker order
    #[wasm_bindgen]
    pub fn units_for(&self, category: &str) -> Result<String, JsValue> {
        let category = parse_category(category)?;
        let entries: Vec<_> = units::units_for(category)
            .iter()
            .map(|unit| {
                serde_json::json!({
                    "id": unit,
                    "symbol": unit.symbol(),
                    "name": self.formatter.label(*unit, false),
                })
            })
            .collect();

        serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    #[wasm_bindgen]
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        let from = parse_unit(from)?;
        let to = parse_unit(to)?;
        convert::convert(amount, from.category(), from, to).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn format(&self, value: f64, unit: &str) -> Result<String, JsValue> {
        let unit = parse_unit(unit)?;
        Ok(self.formatter.format(value, unit))
    }

    /// Current selection as JSON: {category, from, to, amount_text}
    #[wasm_bindgen]
    pub fn selection(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize selection: {}", e)))
    }

    #[wasm_bindgen]
    pub fn select_category(&mut self, category: &str) -> Result<(), JsValue> {
        let category = parse_category(category)?;
        self.session.select_category(category);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_from(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.session.set_from(unit).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_to(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.session.set_to(unit).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_amount(&mut self, text: &str) {
        self.session.set_amount_text(text);
    }

    /// Text for the result display, or undefined while the amount is not a number
    #[wasm_bindgen]
    pub fn result(&self) -> Option<String> {
        self.session.result(&self.formatter)
    }
}
