// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

pub(crate) mod advertisers;
pub(crate) mod bookings;
pub(crate) mod catalog;
pub(crate) mod schema;
pub(crate) mod seed;

pub use schema::initialize_schema;
