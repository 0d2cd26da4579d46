//! Export adapter: render the live invoice view to a downloadable PDF.
//!
//! The DOM-to-PDF conversion is delegated to the external `html2pdf`
//! service loaded by `index.html`; this module owns the fixed export
//! configuration and the JS interop that drives the service. Export is
//! read-only with respect to the document model.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Output page format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    Letter,
}

/// Output page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
}

/// Fixed export configuration; not user-exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub filename: String,
    /// Page margin in inches.
    pub margin: f64,
    /// JPEG quality for rasterized images, 0.0..=1.0.
    pub image_quality: f64,
    /// Raster scale factor; 2x keeps text and line rendering crisp.
    pub scale: u32,
    /// Permit cross-origin image loading during capture.
    pub use_cors: bool,
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: "invoice.pdf".to_string(),
            margin: 1.0,
            image_quality: 0.98,
            scale: 2,
            use_cors: true,
            format: PageFormat::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

impl ExportOptions {
    /// Option object in the shape the external renderer expects.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "margin": self.margin,
            "filename": self.filename,
            "image": { "type": "jpeg", "quality": self.image_quality },
            "html2canvas": { "scale": self.scale, "useCORS": self.use_cors },
            "jsPDF": {
                "unit": "in",
                "format": self.format,
                "orientation": self.orientation,
            },
        })
    }
}

/// Convert the rendered invoice `element` into a downloadable PDF named
/// per the options.
///
/// The external service reads the live presentation; the document model is
/// never touched, so a failed export leaves the session usable and the
/// export can simply be retried.
pub async fn download_pdf(
    element: &web_sys::Element,
    options: &ExportOptions,
) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;

    // The html2pdf bundle registers a factory function on `window`.
    let factory = js_sys::Reflect::get(&window, &JsValue::from_str("html2pdf"))
        .map_err(|e| format!("failed to get html2pdf: {e:?}"))?;
    if factory.is_undefined() {
        return Err("html2pdf is not loaded".to_string());
    }

    let worker = js_sys::Function::from(factory)
        .call0(&JsValue::NULL)
        .map_err(|e| format!("failed to create html2pdf worker: {e:?}"))?;

    let opts = serde_wasm_bindgen::to_value(&options.to_json())
        .map_err(|e| format!("failed to serialize export options: {e:?}"))?;

    // worker.set(options).from(element).save()
    let worker = call_method(&worker, "set", &[&opts])?;
    let worker = call_method(&worker, "from", &[element.as_ref()])?;
    let saving = call_method(&worker, "save", &[])?;

    // `save()` returns a thenable worker; `Promise::resolve` adopts it.
    JsFuture::from(js_sys::Promise::resolve(&saving))
        .await
        .map_err(|e| format!("PDF generation failed: {e:?}"))?;

    Ok(())
}

/// Fetch a property of `target` and call it as a method.
fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, String> {
    let f = js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| format!("failed to get {name}: {e:?}"))?;
    let f = js_sys::Function::from(f);
    let result = match *args {
        [] => f.call0(target),
        [a] => f.call1(target, a),
        [a, b] => f.call2(target, a, b),
        _ => return Err(format!("unsupported arity calling {name}")),
    };
    result.map_err(|e| format!("failed to call {name}: {e:?}"))
}
