use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use region::{
    Bounds, ElementMetrics, ElementQuery, Region, RegionError, RegionSource, SurfaceEvent,
    SurfaceMetrics, Viewport, ViewportOptions,
};

struct Page(Vec<(&'static str, ElementMetrics)>);

impl ElementQuery for Page {
    fn measure(&self, selector: &str) -> Option<ElementMetrics> {
        self.0
            .iter()
            .find(|(s, _)| *s == selector)
            .map(|(_, m)| *m)
    }
}

fn page() -> Page {
    Page(alloc::vec![
        (
            "#menu",
            ElementMetrics {
                top: 0.0,
                left: 0.0,
                width: 200.0,
                height: 40.0,
            },
        ),
        (
            "#tooltip",
            ElementMetrics {
                top: 100.0,
                left: 50.0,
                width: 80.0,
                height: 20.0,
            },
        ),
    ])
}

#[derive(Default)]
struct Styles(Vec<(String, Placement)>);

impl StyleSink for Styles {
    fn apply_placement(&mut self, selector: &str, placement: Placement) {
        self.0.push((selector.into(), placement));
    }
}

#[test]
fn element_predicates_delegate_to_region() {
    let q = page();
    let menu = ElementRegion::new(&q, "#menu");
    let tooltip = ElementRegion::new(&q, "#tooltip");
    let tip = tooltip.region().unwrap();

    assert_eq!(menu.region().unwrap().right(), 200.0);
    assert_eq!(menu.area(), Ok(8000.0));
    assert_eq!(menu.is_above(tip), Ok(true));
    assert_eq!(tooltip.is_below(menu.region().unwrap()), Ok(true));
    assert_eq!(menu.is_left_of(tip), Ok(false));
    assert_eq!(tooltip.is_right_of(menu.region().unwrap()), Ok(false));
    assert_eq!(menu.intersects(tip), Ok(false));
    assert_eq!(menu.intersection(tip), Ok(None));
    assert_eq!(menu.contains(tip), Ok(false));

    let screen = Region::new(0.0, 0.0, 1000.0, 1000.0).unwrap();
    assert_eq!(tooltip.is_contained_by(screen), Ok(true));
}

#[test]
fn missing_element_fails_every_predicate() {
    let q = page();
    let ghost = ElementRegion::new(&q, "#ghost");
    let any = Region::default();
    let not_found = Err(RegionError::NotFound(String::from("#ghost")));

    assert_eq!(ghost.region(), not_found);
    assert_eq!(ghost.is_above(any), Err(RegionError::NotFound("#ghost".into())));
    assert!(ghost.intersects(any).is_err());
    assert!(ghost.intersection(any).is_err());
    assert!(ghost.contains(any).is_err());
    assert!(ghost.area().is_err());
}

#[test]
fn place_applies_absolute_positioning() {
    let q = page();
    let mut styles = Styles::default();
    let tooltip = ElementRegion::new(&q, "#tooltip");

    let placed = tooltip
        .place(&mut styles, (300.0, 120.0, 260.0, 100.0))
        .unwrap();
    assert_eq!(
        placed,
        Placement {
            left: 260.0,
            top: 100.0,
            width: 40.0,
            height: 20.0,
        }
    );
    assert_eq!(styles.0.len(), 1);
    assert_eq!(styles.0[0].0, "#tooltip");
    assert_eq!(styles.0[0].1, placed);
    assert_eq!(placed.region(), Region::new(260.0, 100.0, 300.0, 120.0));
}

#[test]
fn place_over_another_element() {
    let q = page();
    let mut styles = Styles::default();
    let tooltip = ElementRegion::new(&q, "#tooltip");

    tooltip
        .place(
            &mut styles,
            RegionSource::Element {
                query: &q,
                selector: "#menu",
            },
        )
        .unwrap();
    assert_eq!(
        styles.0[0].1,
        Placement::from(ElementRegion::new(&q, "#menu").region().unwrap())
    );
}

#[test]
fn failed_placement_applies_nothing() {
    let q = page();
    let mut styles = Styles::default();
    let tooltip = ElementRegion::new(&q, "#tooltip");

    let err = tooltip
        .place(&mut styles, Bounds {
            top: None,
            ..Bounds::default()
        })
        .unwrap_err();
    assert!(matches!(err, RegionError::InvalidArgument(_)));
    assert!(tooltip
        .place(&mut styles, (f64::NAN, 0.0))
        .is_err());
    assert!(styles.0.is_empty());
}

#[test]
fn elements_compare_against_the_viewport() {
    let q = page();
    let menu = ElementRegion::new(&q, "#menu");
    let tooltip = ElementRegion::new(&q, "#tooltip");
    let surface = SurfaceMetrics {
        scroll_left: 0.0,
        scroll_top: 0.0,
        width: 400.0,
        height: 90.0,
    };
    let mut vp = Viewport::attach(ViewportOptions::default(), &surface);

    assert_eq!(menu.is_contained_by(&vp), Ok(true));
    assert_eq!(tooltip.is_below(&vp), Ok(true));

    let scrolled = SurfaceMetrics {
        scroll_top: 60.0,
        ..surface
    };
    assert!(vp.handle_event(SurfaceEvent::Scroll, &scrolled));
    assert_eq!(menu.is_above(&vp), Ok(true));
    assert_eq!(tooltip.is_contained_by(&vp), Ok(true));
}
