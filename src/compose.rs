//! Anchor-to-anchor composition.
//!
//! Both operators go purely through the anchor contract, so they work for any
//! pair of shapes.

use crate::shapes::Shape;

/// Offset that puts `p`'s south anchor one row above `q`'s north anchor.
#[must_use]
pub fn up_offset<P, Q>(p: &P, q: &Q) -> (i32, i32)
where
    P: Shape + ?Sized,
    Q: Shape + ?Sized,
{
    let n = q.north();
    let s = p.south();
    (n.x - s.x, n.y - s.y + 1)
}

/// Offset that puts `p`'s north anchor one row below `q`'s south anchor.
#[must_use]
pub fn down_offset<P, Q>(p: &P, q: &Q) -> (i32, i32)
where
    P: Shape + ?Sized,
    Q: Shape + ?Sized,
{
    let s = q.south();
    let n = p.north();
    (s.x - n.x, s.y - n.y - 1)
}

/// Place `p` directly on top of `q`, touching.
pub fn up<P, Q>(p: &mut P, q: &Q)
where
    P: Shape + ?Sized,
    Q: Shape + ?Sized,
{
    let (dx, dy) = up_offset(p, q);
    p.move_by(dx, dy);
}

/// Place `p` directly under `q`, touching.
pub fn down<P, Q>(p: &mut P, q: &Q)
where
    P: Shape + ?Sized,
    Q: Shape + ?Sized,
{
    let (dx, dy) = down_offset(p, q);
    p.move_by(dx, dy);
}
