use crate::constants::*;
use crate::core::GalleryState;
use crate::dom;
use web_sys as web;

/// Elements making up one mounted gallery.
pub struct GalleryDom {
    document: web::Document,
    root: web::HtmlElement,
    cylinder: web::HtmlElement,
    faces: Vec<web::HtmlElement>,
    rendered_angle: Option<f64>,
    dragging: bool,
}

impl GalleryDom {
    /// Build the tree under `host` and apply the initial layout and rotation.
    pub fn build(
        document: &web::Document,
        host: &web::Element,
        state: &GalleryState,
    ) -> anyhow::Result<Self> {
        let root: web::HtmlElement = dom::create_element(document, "div", CLASS_CONTAINER)?;
        let left: web::HtmlElement = dom::create_element(document, "div", CLASS_EDGE_LEFT)?;
        let right: web::HtmlElement = dom::create_element(document, "div", CLASS_EDGE_RIGHT)?;
        let stage: web::HtmlElement = dom::create_element(document, "div", CLASS_STAGE)?;
        let cylinder: web::HtmlElement = dom::create_element(document, "div", CLASS_CYLINDER)?;

        append(&stage, &cylinder)?;
        append(&root, &left)?;
        append(&root, &right)?;
        append(&root, &stage)?;
        append(host, &root)?;

        let mut tree = Self {
            document: document.clone(),
            root,
            cylinder,
            faces: Vec::new(),
            rendered_angle: None,
            dragging: false,
        };
        if let Err(e) = tree.apply_layout(state) {
            tree.remove();
            return Err(e);
        }
        tree.apply_rotation(state);
        Ok(tree)
    }

    pub fn cylinder(&self) -> &web::HtmlElement {
        &self.cylinder
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Size the cylinder and (re)place every face for the current layout.
    pub fn apply_layout(&mut self, state: &GalleryState) -> anyhow::Result<()> {
        let layout = state.layout();
        dom::set_style(
            &self.cylinder,
            "width",
            &format!("{}px", layout.cylinder_width),
        );
        dom::set_style(&self.cylinder, "transform-origin", &layout.transform_origin());

        for face in self.faces.drain(..) {
            face.remove();
        }
        if layout.angle_per_face.is_none() {
            log::warn!("[gallery] no images configured; rendering an empty cylinder");
            return Ok(());
        }
        for (url, transform) in state.images().iter().zip(layout.face_transforms()) {
            let face: web::HtmlElement = dom::create_element(&self.document, "div", CLASS_FACE)?;
            dom::set_style(&face, "transform", &transform);
            let img: web::HtmlImageElement =
                dom::create_element(&self.document, "img", CLASS_IMAGE)?;
            img.set_src(url);
            img.set_alt(IMAGE_ALT);
            img.set_draggable(false);
            append(&face, &img)?;
            append(&self.cylinder, &face)?;
            self.faces.push(face);
        }
        Ok(())
    }

    /// Write the live cylinder transform if the angle moved since last time.
    pub fn apply_rotation(&mut self, state: &GalleryState) {
        let angle = state.angle();
        if self.rendered_angle == Some(angle) {
            return;
        }
        dom::set_style(&self.cylinder, "transform", &state.container_transform());
        self.rendered_angle = Some(angle);
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        if self.dragging == dragging {
            return;
        }
        self.dragging = dragging;
        let classes = self.cylinder.class_list();
        _ = if dragging {
            classes.add_1(CLASS_DRAGGING)
        } else {
            classes.remove_1(CLASS_DRAGGING)
        };
    }

    pub fn remove(&mut self) {
        self.faces.clear();
        self.root.remove();
    }
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}
