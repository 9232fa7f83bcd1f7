//! Neighbour interface expansion.
//!
//! Replicates the template interface of a border router so that the router
//! ends up with one interface per simulated neighbour AS. Interface `x`
//! (for `x` in `2..=N`) gets a copy of the template with
//! `ISD_AS = <prefix><hex(base + x)>`.

use crate::config::{ExpandOptions, NeighbourCount};
use crate::error::TopogenError;
use crate::topology::types::{interfaces_path, InterfaceDescriptor, InterfaceTable, Topology};
use log::{debug, info, warn};
use serde_json::Value;

/// Expand the interfaces of `options.border_router` to `neighbours` entries.
///
/// Returns the number of interfaces written, `neighbours - 1` with the default
/// template id. A count of 1 leaves the topology untouched. Existing
/// interfaces whose id collides with a generated one are overwritten.
///
/// # Errors
/// * `MissingField` if the router, its interface table or the template
///   interface does not exist
/// * `UnexpectedType` if one of them is not a JSON object
/// * `InvalidArgument` if an AS number cannot be represented
pub fn expand(
    topology: &mut Topology,
    options: &ExpandOptions,
    neighbours: NeighbourCount,
) -> Result<usize, TopogenError> {
    let router = options.border_router.as_str();
    info!(
        "Expanding border router {} to {} neighbour interface(s)",
        router, neighbours
    );

    let interfaces = topology.interfaces_mut(router)?;
    let written = expand_interfaces(interfaces, options, neighbours).map_err(|e| match e {
        TopogenError::MissingField { path } => {
            TopogenError::missing(format!("{}.{}", interfaces_path(router), path))
        }
        TopogenError::UnexpectedType { path, expected } => TopogenError::UnexpectedType {
            path: format!("{}.{}", interfaces_path(router), path),
            expected,
        },
        other => other,
    })?;

    info!("Generated {} neighbour interface(s)", written);
    Ok(written)
}

/// Expand a bare interface table.
///
/// Same contract as [`expand`]; a missing or non-object template is
/// reported with the template id as the path. New interfaces are appended
/// after the existing ones, overwritten ones keep their position.
pub fn expand_interfaces(
    interfaces: &mut InterfaceTable,
    options: &ExpandOptions,
    neighbours: NeighbourCount,
) -> Result<usize, TopogenError> {
    let template_id = options.template_interface;
    let template_key = template_id.to_string();
    let template = match interfaces.get(&template_key) {
        Some(Value::Object(attributes)) => InterfaceDescriptor::from_map(attributes.clone()),
        Some(_) => return Err(TopogenError::not_an_object(template_key)),
        None => return Err(TopogenError::missing(template_key)),
    };

    let mut written = 0;
    for index in 2..=neighbours.get() {
        if index == template_id {
            // Never overwrite the template itself
            warn!("Skipping interface {}: it is the template", index);
            continue;
        }

        let isd_as = options.isd_as_for(index)?;
        debug!("Interface {} -> {}", index, isd_as);

        let replica = template.replicate(isd_as).into_value();
        if interfaces.insert(index.to_string(), replica).is_some() {
            warn!("Overwrote existing interface {}", index);
        }
        written += 1;
    }

    Ok(written)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROUTER: &str = "br1-ff00_0_120-1";

    fn topology() -> Topology {
        serde_json::from_value(json!({
            "BorderRouters": {
                "br1-ff00_0_120-1": {
                    "Interfaces": {
                        "1": {
                            "LinkTo": "CORE",
                            "ISD_AS": "1-ff00:0:121",
                            "Bandwidth": 1000,
                            "RemoteOverlay": { "Addr": "127.0.0.5", "OverlayPort": 50000 }
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn count(n: u64) -> NeighbourCount {
        NeighbourCount::new(n).unwrap()
    }

    #[test]
    fn test_expand_three_neighbours() {
        let mut topo = topology();
        let template = topo.interfaces(ROUTER).unwrap()["1"].clone();

        let written = expand(&mut topo, &ExpandOptions::default(), count(3)).unwrap();
        assert_eq!(written, 2);

        let interfaces = topo.interfaces(ROUTER).unwrap();
        assert_eq!(interfaces.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(interfaces["1"], template);
        assert_eq!(interfaces["2"]["ISD_AS"], json!("1-ff00:0:122"));
        assert_eq!(interfaces["3"]["ISD_AS"], json!("1-ff00:0:123"));

        let mut copy = interfaces["3"].clone();
        copy["ISD_AS"] = template["ISD_AS"].clone();
        assert_eq!(copy, template);
    }

    #[test]
    fn test_copies_keep_template_key_order() {
        let mut topo = topology();
        expand(&mut topo, &ExpandOptions::default(), count(2)).unwrap();

        let copy = topo.interfaces(ROUTER).unwrap()["2"].as_object().unwrap();
        assert_eq!(
            copy.keys().collect::<Vec<_>>(),
            vec!["LinkTo", "ISD_AS", "Bandwidth", "RemoteOverlay"]
        );
    }

    #[test]
    fn test_single_neighbour_is_noop() {
        let mut topo = topology();
        let before = topo.clone();

        let written = expand(&mut topo, &ExpandOptions::default(), count(1)).unwrap();
        assert_eq!(written, 0);
        assert_eq!(topo, before);
    }

    #[test]
    fn test_null_isd_as_template_is_kept() {
        let mut topo: Topology = serde_json::from_value(json!({
            "BorderRouters": { "br1-ff00_0_120-1": { "Interfaces": { "1": { "ISD_AS": null, "MTU": 1 } } } }
        }))
        .unwrap();

        expand(&mut topo, &ExpandOptions::default(), count(1)).unwrap();
        assert_eq!(
            serde_json::to_string(&topo.interfaces(ROUTER).unwrap()["1"]).unwrap(),
            r#"{"ISD_AS":null,"MTU":1}"#
        );

        expand(&mut topo, &ExpandOptions::default(), count(2)).unwrap();
        let interfaces = topo.interfaces(ROUTER).unwrap();
        assert_eq!(interfaces["1"]["ISD_AS"], Value::Null);
        assert_eq!(interfaces["2"], json!({ "ISD_AS": "1-ff00:0:122", "MTU": 1 }));
    }

    #[test]
    fn test_isd_as_for_every_index() {
        let mut topo = topology();
        expand(&mut topo, &ExpandOptions::default(), count(40)).unwrap();

        let interfaces = topo.interfaces(ROUTER).unwrap();
        assert_eq!(interfaces.len(), 40);
        for x in 2..=40u64 {
            let expected = format!("1-ff00:0:{:x}", 0x120 + x);
            assert_eq!(interfaces[&x.to_string()]["ISD_AS"], json!(expected));
        }
    }

    #[test]
    fn test_existing_interface_is_overwritten_in_place() {
        let mut topo = topology();
        let interfaces = topo.interfaces_mut(ROUTER).unwrap();
        interfaces.insert("2".to_string(), json!({ "ISD_AS": "2-ff00:0:999" }));
        interfaces.insert("7".to_string(), json!({ "ISD_AS": "1-ff00:0:127" }));

        expand(&mut topo, &ExpandOptions::default(), count(3)).unwrap();

        let interfaces = topo.interfaces(ROUTER).unwrap();
        assert_eq!(interfaces.keys().collect::<Vec<_>>(), vec!["1", "2", "7", "3"]);
        assert_eq!(interfaces["2"]["ISD_AS"], json!("1-ff00:0:122"));
        assert_eq!(interfaces["2"]["LinkTo"], json!("CORE"));
        assert_eq!(interfaces["7"]["ISD_AS"], json!("1-ff00:0:127"));
    }

    #[test]
    fn test_generated_entries_do_not_alias() {
        let mut topo = topology();
        expand(&mut topo, &ExpandOptions::default(), count(3)).unwrap();

        let interfaces = topo.interfaces_mut(ROUTER).unwrap();
        interfaces["2"]["RemoteOverlay"]["Addr"] = json!("10.1.1.1");

        let interfaces = topo.interfaces(ROUTER).unwrap();
        assert_eq!(interfaces["1"]["RemoteOverlay"]["Addr"], json!("127.0.0.5"));
        assert_eq!(interfaces["3"]["RemoteOverlay"]["Addr"], json!("127.0.0.5"));
    }

    #[test]
    fn test_missing_template() {
        let mut topo: Topology = serde_json::from_value(json!({
            "BorderRouters": { "br1-ff00_0_120-1": { "Interfaces": { "5": {} } } }
        }))
        .unwrap();

        let err = expand(&mut topo, &ExpandOptions::default(), count(3)).unwrap_err();
        assert!(matches!(
            err,
            TopogenError::MissingField { ref path } if path == "BorderRouters.br1-ff00_0_120-1.Interfaces.1"
        ));
    }

    #[test]
    fn test_template_must_be_an_object() {
        let mut topo: Topology = serde_json::from_value(json!({
            "BorderRouters": { "br1-ff00_0_120-1": { "Interfaces": { "1": "eth0" } } }
        }))
        .unwrap();

        let err = expand(&mut topo, &ExpandOptions::default(), count(2)).unwrap_err();
        assert!(matches!(
            err,
            TopogenError::UnexpectedType { ref path, .. } if path == "BorderRouters.br1-ff00_0_120-1.Interfaces.1"
        ));
    }

    #[test]
    fn test_missing_border_router() {
        let mut topo: Topology = serde_json::from_value(json!({
            "BorderRouters": { "br2-ff00_0_130-1": { "Interfaces": { "1": {} } } }
        }))
        .unwrap();

        let err = expand(&mut topo, &ExpandOptions::default(), count(2)).unwrap_err();
        assert!(matches!(err, TopogenError::MissingField { .. }));
    }

    #[test]
    fn test_other_routers_are_not_validated() {
        let mut topo: Topology = serde_json::from_value(json!({
            "BorderRouters": {
                "br1-ff00_0_120-1": { "Interfaces": { "1": { "ISD_AS": "1-ff00:0:121" } } },
                "br9": { "Interfaces": { "up": {}, "01": null } }
            }
        }))
        .unwrap();
        let other = topo.border_router("br9").unwrap().clone();

        expand(&mut topo, &ExpandOptions::default(), count(2)).unwrap();
        assert_eq!(topo.border_router("br9").unwrap(), &other);
    }

    #[test]
    fn test_non_default_template_is_never_overwritten() {
        let mut table: InterfaceTable = serde_json::from_value(json!({
            "3": { "ISD_AS": "1-ff00:0:121", "LinkTo": "PEER" }
        }))
        .unwrap();
        let options = ExpandOptions {
            template_interface: 3,
            ..Default::default()
        };

        let written = expand_interfaces(&mut table, &options, count(4)).unwrap();
        assert_eq!(written, 2);
        assert_eq!(table["3"]["ISD_AS"], json!("1-ff00:0:121"));
        assert_eq!(table["4"]["ISD_AS"], json!("1-ff00:0:124"));
    }
}
