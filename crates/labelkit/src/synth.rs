//! Command synthesis - renders a description map as configuration commands.

use crate::merge::DescriptionMap;
use crate::types::ConfigCommand;

/// Render one command per described interface, sorted by canonical name.
///
/// Pure: nothing is sent anywhere, so the result can be previewed.
pub fn synthesize(map: &DescriptionMap) -> Vec<ConfigCommand> {
    map.iter()
        .map(|(interface, description)| ConfigCommand {
            interface: interface.clone(),
            short_name: interface.short(),
            description: description.render(),
        })
        .collect()
}
