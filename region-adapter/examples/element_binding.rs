use region::{
    ElementMetrics, ElementQuery, RegionError, SurfaceMetrics, Viewport, ViewportOptions,
};
use region_adapter::{ElementRegion, Placement, StyleSink};

// Example: element-bound comparisons and absolute placement without a real DOM.
struct Dom;

impl ElementQuery for Dom {
    fn measure(&self, selector: &str) -> Option<ElementMetrics> {
        match selector {
            "#nav" => Some(ElementMetrics {
                top: 0.0,
                left: 0.0,
                width: 1024.0,
                height: 48.0,
            }),
            "#popover" => Some(ElementMetrics {
                top: 900.0,
                left: 300.0,
                width: 240.0,
                height: 120.0,
            }),
            _ => None,
        }
    }
}

struct PrintStyles;

impl StyleSink for PrintStyles {
    fn apply_placement(&mut self, selector: &str, p: Placement) {
        println!(
            "{selector} {{ position: absolute; left: {}px; top: {}px; width: {}px; height: {}px }}",
            p.left, p.top, p.width, p.height
        );
    }
}

fn main() -> Result<(), RegionError> {
    let dom = Dom;
    let viewport = Viewport::attach(
        ViewportOptions::default(),
        &SurfaceMetrics {
            scroll_left: 0.0,
            scroll_top: 0.0,
            width: 1024.0,
            height: 768.0,
        },
    );

    let nav = ElementRegion::new(&dom, "#nav");
    let popover = ElementRegion::new(&dom, "#popover");
    println!("nav visible: {}", nav.intersects(&viewport)?);
    println!("popover below the fold: {}", popover.is_below(&viewport)?);

    // Pull the popover into view, just under the nav bar.
    let target = (300.0, 60.0, 540.0, 180.0);
    popover.place(&mut PrintStyles, target)?;

    match ElementRegion::new(&dom, "#missing").region() {
        Err(err) => println!("lookup failed: {err}"),
        Ok(r) => println!("unexpected region {r}"),
    }
    Ok(())
}
