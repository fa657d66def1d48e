// Example: building regions from different sources and comparing them.
use region::{Bounds, Region, RegionError};

fn main() -> Result<(), RegionError> {
    // Corners may come in any order; they are normalized on construction.
    let card = Region::new(300.0, 200.0, 20.0, 40.0)?;
    let badge = Region::factory(Bounds::at(30.0, 260.0).with_right(290.0).with_bottom(50.0))?;
    let cursor = Region::from_point(150.0, 120.0)?;

    println!("card={card} area={}", card.area());
    println!("badge={badge}");
    println!("card contains cursor: {}", card.contains(cursor));
    println!("badge is right of card: {}", badge.is_right_of(card));
    println!("badge intersects card: {}", badge.intersects(card));
    println!("overlap={:?}", card.intersection(badge));

    // A missing `top` edge is rejected instead of guessed.
    let err = Region::from_bounds(Bounds::default()).unwrap_err();
    println!("invalid bounds: {err}");
    Ok(())
}
