mod status;
mod submodule;

pub use status::GitCli;
pub use submodule::{parse_status_line, Submodule, SubmoduleState};

use anyhow::Result;

/// Anything that can list the submodules of a work tree
pub trait SubmoduleSource {
    /// List every submodule in the order git reports them
    fn submodules(&self) -> Result<Vec<Submodule>>;
}
