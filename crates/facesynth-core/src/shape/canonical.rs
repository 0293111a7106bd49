//! Built-in canonical mean face.

use super::{FaceShape, LANDMARK_COUNT};
use crate::math::{Pt3, Real};

/// 68-landmark canonical face geometry in the face coordinate frame,
/// meters, dlib ordering (jaw 0-16, brows 17-26, nose 27-35, eyes 36-47,
/// lips 48-67).
///
/// Subset of a 468-point canonical face mesh reduced to the 68-point
/// convention. x spans roughly +-0.077 m, y grows toward the chin, and the
/// feature surface extends to z ~ 0.099 m; the nose tip (landmark 30) sits
/// at the origin.
#[rustfmt::skip]
const CANONICAL_LANDMARKS: [[Real; 3]; LANDMARK_COUNT] = [
    [-0.07743095, -0.03491864, 0.09480771], [-0.07664182, -0.01799997, 0.09911471],
    [-0.07542244, -0.00077583, 0.09906925], [-0.07270895, 0.01764052, 0.09728059],
    [-0.06719682, 0.0366178, 0.09221005], [-0.05940524, 0.05096764, 0.08107072],
    [-0.04068926, 0.06866244, 0.05550485], [-0.02308977, 0.07847331, 0.03866534],
    [0.0, 0.08276513, 0.03211112], [0.02308977, 0.07847331, 0.03866534],
    [0.04068926, 0.06866244, 0.05550485], [0.05940524, 0.05096764, 0.08107072],
    [0.06719682, 0.0366178, 0.09221005], [0.07270895, 0.01764052, 0.09728059],
    [0.07542244, -0.00077583, 0.09906925], [0.07664182, -0.01799997, 0.09911471],
    [0.07743095, -0.03491864, 0.09480771], [-0.05720968, -0.05381449, 0.04644752],
    [-0.04985894, -0.05929326, 0.03723627], [-0.03986562, -0.06236352, 0.03009289],
    [-0.02760292, -0.06227836, 0.02459614], [-0.01395634, -0.06138828, 0.02159572],
    [0.01395634, -0.06138828, 0.02159572], [0.02760292, -0.06227836, 0.02459614],
    [0.03986562, -0.06236352, 0.03009289], [0.04985894, -0.05929326, 0.03723627],
    [0.05720968, -0.05381449, 0.04644752], [0.0, -0.04397892, 0.02239589],
    [0.0, -0.02855234, 0.01158854], [0.0, -0.01492534, 0.00232734],
    [0.0, 0.0, 0.0], [-0.01405627, 0.00587331, 0.02234517],
    [-0.00597442, 0.00886821, 0.01609148], [0.0, 0.00962159, 0.01417337],
    [0.00597442, 0.00886821, 0.01609148], [0.01405627, 0.00587331, 0.02234517],
    [-0.04445859, -0.03790856, 0.04302182], [-0.03670075, -0.04054579, 0.03751279],
    [-0.02724032, -0.04088675, 0.03603837], [-0.01856432, -0.0371211, 0.037177],
    [-0.02724032, -0.03442667, 0.03698453], [-0.03670075, -0.03487018, 0.03840374],
    [0.01856432, -0.0371211, 0.037177], [0.02724032, -0.04088675, 0.03603837],
    [0.03670075, -0.04054579, 0.03751279], [0.04445859, -0.03790856, 0.04302182],
    [0.03670075, -0.03487018, 0.03840374], [0.02724032, -0.03442667, 0.03698453],
    [-0.02456206, 0.03215756, 0.0319172], [-0.0191491, 0.02676281, 0.02446674],
    [-0.00711452, 0.0220249, 0.0159856], [0.0, 0.02279539, 0.01496097],
    [0.00711452, 0.0220249, 0.0159856], [0.0191491, 0.02676281, 0.02446674],
    [0.02456206, 0.03215756, 0.0319172], [0.01838624, 0.03701881, 0.02651867],
    [0.00699606, 0.04164985, 0.020273], [0.0, 0.04238258, 0.01940163],
    [-0.00699606, 0.04164985, 0.020273], [-0.01838624, 0.03701881, 0.02651867],
    [-0.02153084, 0.03149457, 0.03437511], [-0.00533422, 0.02866357, 0.02337402],
    [0.0, 0.02867571, 0.02256122], [0.00533422, 0.02866357, 0.02337402],
    [0.02153084, 0.03149457, 0.03437511], [0.00583218, 0.03391117, 0.02135735],
    [0.0, 0.03415535, 0.0207085], [-0.00583218, 0.03391117, 0.02135735],
];

/// The built-in canonical mean face.
pub fn canonical_face() -> FaceShape {
    let points = CANONICAL_LANDMARKS
        .iter()
        .map(|p| Pt3::new(p[0], p[1], p[2]))
        .collect();
    FaceShape { points }
}
