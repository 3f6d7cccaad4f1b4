/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations
in this crate. All algorithms are re-exported at the top level of this module,
so you can simply do:
```rust
use eulertour::algo::*;
```
and gain access to traversal, connectivity, Eulerian classification and the
tour construction itself. Algorithms are provided as traits that are
blanket-implemented for every graph exposing the required operations.
*/

mod classify;
mod connectivity;
mod euler;
mod traversal;

use crate::{error::*, prelude::*};

pub use classify::*;
pub use connectivity::*;
pub use euler::*;
pub use traversal::*;
