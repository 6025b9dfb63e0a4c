/// Container summary command.
pub mod info;
/// Section offset diagnostics command.
pub mod layout;
/// Single model dump command.
pub mod model;
mod util;
