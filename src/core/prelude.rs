#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{config::*, error::NumericsError},
    util::{
        ex_math,
        linalg,
        linalg::{
            CentredRect, FloatScalar, Indexer, IndexerMut, IntScalar, Mat2d, Mat2f, Matrix2,
            ReadOnlyRect, ReadOnlyTuple2, ReadOnlyTuple3, ReadOnlyTuple4, Rect, RectMut, Recti,
            Rectd, Rectf, Rectui, Scalar, Tuple2, Tuple3, Tuple4, Vec2b, Vec2sb, Vec2s, Vec2us,
            Vec2i, Vec2ui, Vec2l, Vec2ul, Vec2n, Vec2un, Vec2h, Vec2f, Vec2d, Vec2m, Vec3b, Vec3sb,
            Vec3s, Vec3us, Vec3i, Vec3ui, Vec3l, Vec3ul, Vec3n, Vec3un, Vec3h, Vec3f, Vec3d, Vec3m,
            Vec4b, Vec4sb, Vec4s, Vec4us, Vec4i, Vec4ui, Vec4l, Vec4ul, Vec4n, Vec4un, Vec4h, Vec4f,
            Vec4d, Vec4m, Vector, Vector2, Vector2D, Vector3, Vector3D, Vector4, Vector4D,
            VectorFloat, VectorInt,
        },
    },
};
