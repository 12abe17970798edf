//! Generic small-vector and rectangle arithmetic.
//!
//! The main entry points live in [`util::linalg`]: [`Vector2`](util::linalg::Vector2),
//! [`Vector3`](util::linalg::Vector3) and [`Vector4`](util::linalg::Vector4) are generic over
//! any [`Scalar`](util::linalg::Scalar) element type, with aliases such as
//! [`Vec2i`](util::linalg::Vec2i) and [`Vec3f`](util::linalg::Vec3f) for the common ones.
//! Most users will want `use tesseract_numerics::core::prelude::*;`.

pub mod core;
pub mod util;
