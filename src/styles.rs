use crate::constants::STYLE_ELEMENT_ID;
use crate::dom;
use web_sys as web;

// Static presentation. Layout-dependent values (cylinder width, transform
// origin, face transforms) are set inline by `render`.
const GALLERY_CSS: &str = r#"
.rg-container { position: relative; height: 500px; width: 100%; overflow: hidden; }
.rg-edge { position: absolute; top: 0; width: 50px; height: 100%; z-index: 10; pointer-events: none; }
.rg-edge-left { left: 0; background: linear-gradient(to right, #000, transparent); }
.rg-edge-right { right: 0; background: linear-gradient(to left, #000, transparent); }
.rg-stage { display: flex; height: 100%; align-items: center; justify-content: center; perspective: 1000px; transform-style: preserve-3d; }
.rg-cylinder { position: relative; display: flex; height: 100%; justify-content: center; transform-style: preserve-3d; cursor: grab; touch-action: pan-y; user-select: none; }
.rg-cylinder.rg-dragging { cursor: grabbing; }
.rg-face { position: absolute; top: 50%; left: 50%; display: flex; width: 350px; height: 300px; margin: -150px 0 0 -175px; box-sizing: border-box; align-items: center; justify-content: center; padding: 6%; backface-visibility: hidden; }
.rg-image { pointer-events: none; width: 100%; height: 100%; border-radius: 15px; border: 3px solid #fff; object-fit: cover; transition: transform 300ms ease, border-color 300ms ease; }
.rg-face:hover .rg-image { transform: scale(1.1); border-color: #ff0000; }
"#;

/// Install the gallery stylesheet into `<head>` unless already present.
pub fn ensure_installed(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style: web::HtmlStyleElement = dom::create_element(document, "style", "")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(GALLERY_CSS));
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("append stylesheet: {:?}", e))?;
    Ok(())
}
