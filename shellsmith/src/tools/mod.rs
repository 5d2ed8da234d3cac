//! Built-in tool families
//!
//! One module per command family. Each exposes a unit struct implementing
//! [`ToolSpec`](crate::ToolSpec).

pub mod cat_echo;
pub mod chmod;
pub mod chown;
pub mod curl_wget;
pub mod cut_paste;
pub mod df_du;
pub mod docker;
pub mod docker_compose;
pub mod find;
pub mod journalctl;
pub mod rsync;
pub mod sed_awk;
pub mod sort_uniq;
pub mod sysinfo;
pub mod systemd_unit;
pub mod user;
pub mod zip_unzip;

use crate::registry::ToolRegistry;

pub use cat_echo::CatEchoTool;
pub use chmod::ChmodTool;
pub use chown::ChownTool;
pub use curl_wget::CurlWgetTool;
pub use cut_paste::CutPasteTool;
pub use df_du::DfDuTool;
pub use docker::DockerTool;
pub use docker_compose::DockerComposeTool;
pub use find::FindTool;
pub use journalctl::JournalctlTool;
pub use rsync::RsyncTool;
pub use sed_awk::SedAwkTool;
pub use sort_uniq::SortUniqTool;
pub use sysinfo::SysinfoTool;
pub use systemd_unit::SystemdUnitTool;
pub use user::UserTool;
pub use zip_unzip::ZipUnzipTool;

/// Register every built-in tool with the registry
pub fn register_builtin_tools(registry: &mut ToolRegistry) {
    registry.register(CatEchoTool);
    registry.register(ChmodTool);
    registry.register(ChownTool);
    registry.register(CurlWgetTool);
    registry.register(CutPasteTool);
    registry.register(DfDuTool);
    registry.register(DockerTool);
    registry.register(DockerComposeTool);
    registry.register(FindTool);
    registry.register(JournalctlTool);
    registry.register(RsyncTool);
    registry.register(SedAwkTool);
    registry.register(SortUniqTool);
    registry.register(SysinfoTool);
    registry.register(SystemdUnitTool);
    registry.register(UserTool);
    registry.register(ZipUnzipTool);
}
