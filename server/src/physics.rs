use crate::body::Body;

/// Move a body by its velocity and apply its vertical acceleration factor.
///
/// Boundaries carry zero velocity, so advancing them is a no-op.
pub fn advance(body: &Body) -> Body {
    Body {
        pos: body.pos.add(body.vel),
        vel: body.vel.with_y(body.vel.y * body.acc),
        ..body.clone()
    }
}
