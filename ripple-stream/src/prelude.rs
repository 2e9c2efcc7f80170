// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and compose streams: `use ripple_stream::prelude::*;`

pub use crate::{
    catch_error, empty, filter, from_iter, map, merge, merge_with, never, of, skip,
    switch_map, take, tap, throw_error,
};
pub use ripple_core::{
    pipe, Observer, Operator, RippleError, Stream, Subject, Subscriber, Subscription, Teardown,
};
