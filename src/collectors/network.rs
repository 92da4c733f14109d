//! Network interface probe
//!
//! Parses the line-oriented `ip addr show` listing. Unindented lines open a
//! new interface; indented lines refine the interface most recently opened.
//! The loopback device stays in the parsed map and is excluded by the
//! renderer, not here.

use crate::data::{InterfaceMap, InterfaceStatus, LinkState};
use crate::probe::Probe;
use crate::utils::command::run_command;

const UP_MARKER: &str = "state UP";
const ADDRESS_MARKER: &str = "inet ";

pub fn interfaces() -> Probe<InterfaceMap> {
    run_command("ip", &["addr", "show"])
        .map(|listing| parse_interfaces(&listing))
        .into()
}

pub fn parse_interfaces(listing: &str) -> InterfaceMap {
    let mut interfaces = InterfaceMap::new();
    let mut current: Option<String> = None;

    for line in listing.lines() {
        if line.is_empty() {
            continue;
        }

        if !line.starts_with(' ') {
            // header line: "2: eth0: <BROADCAST,...> mtu 1500 ... state UP ..."
            let mut parts = line.split(':');
            let _index = parts.next();
            if let Some(name) = parts.next() {
                let name = name.trim().to_string();
                let state = if line.contains(UP_MARKER) {
                    LinkState::Up
                } else {
                    LinkState::Down
                };
                interfaces.insert(
                    name.clone(),
                    InterfaceStatus {
                        address: None,
                        state,
                    },
                );
                current = Some(name);
            }
        } else if let Some(name) = current.as_deref() {
            let trimmed = line.trim_start();
            if trimmed.starts_with(ADDRESS_MARKER) {
                let address = trimmed
                    .split_whitespace()
                    .nth(1)
                    .and_then(|cidr| cidr.split('/').next());
                if let (Some(address), Some(entry)) = (address, interfaces.get_mut(name)) {
                    entry.address = Some(address.to_string());
                }
            } else if trimmed.contains(UP_MARKER) {
                if let Some(entry) = interfaces.get_mut(name) {
                    entry.state = LinkState::Up;
                }
            }
        }
    }

    interfaces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LOOPBACK;

    const LISTING: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN group default qlen 1000
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
    inet 127.0.0.1/8 scope host lo
       valid_lft forever preferred_lft forever
    inet6 ::1/128 scope host
       valid_lft forever preferred_lft forever
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc mq state UP group default qlen 1000
    link/ether dc:a6:32:01:02:03 brd ff:ff:ff:ff:ff:ff
    inet 192.168.1.5/24 brd 192.168.1.255 scope global dynamic eth0
       valid_lft 86350sec preferred_lft 86350sec
3: wlan0: <BROADCAST,MULTICAST> mtu 1500 qdisc noop state DOWN group default qlen 1000
    link/ether dc:a6:32:04:05:06 brd ff:ff:ff:ff:ff:ff
";

    #[test]
    fn parses_multi_interface_listing_exactly() {
        let map = parse_interfaces(LISTING);
        assert_eq!(map.len(), 3);

        assert_eq!(
            map["eth0"],
            InterfaceStatus {
                address: Some("192.168.1.5".to_string()),
                state: LinkState::Up,
            }
        );
        assert_eq!(
            map["wlan0"],
            InterfaceStatus {
                address: None,
                state: LinkState::Down,
            }
        );
    }

    #[test]
    fn loopback_is_kept_in_the_parsed_map() {
        let map = parse_interfaces(LISTING);
        let lo = &map[LOOPBACK];
        assert_eq!(lo.address.as_deref(), Some("127.0.0.1"));
        // lo reports state UNKNOWN, not state UP
        assert_eq!(lo.state, LinkState::Down);
    }

    #[test]
    fn inet6_lines_do_not_overwrite_the_address() {
        let map = parse_interfaces(LISTING);
        assert_eq!(map[LOOPBACK].address.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn up_marker_on_indented_line_raises_state() {
        let listing = "\
2: eth0: <BROADCAST,MULTICAST> mtu 1500
    vf 0 MAC 00:00:00:00:00:00, state UP
";
        let map = parse_interfaces(listing);
        assert_eq!(map["eth0"].state, LinkState::Up);
    }

    #[test]
    fn empty_listing_parses_to_empty_map() {
        assert!(parse_interfaces("").is_empty());
    }
}
