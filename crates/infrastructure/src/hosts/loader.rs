use hostd_domain::{DomainError, HostsFileError, HostsTable};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::{debug, info};

/// Reads and parses a hosts file into an immutable table.
pub fn load_hosts_file(path: impl AsRef<Path>) -> Result<HostsTable, HostsFileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| HostsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_hosts(&contents)?;
    info!(path = %path.display(), entries = table.len(), "Hosts table loaded");
    Ok(table)
}

/// Parses `<domain> <ipv4>` lines.
///
/// `#` starts a comment running to the end of the line; blank and
/// comment-only lines are skipped. A line with one field or more than two, an
/// address that is not dotted-decimal IPv4, an unencodable domain, or a domain
/// already seen on an earlier line fails the whole load.
pub fn parse_hosts(contents: &str) -> Result<HostsTable, HostsFileError> {
    let mut builder = HostsTable::builder();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line = index + 1;
        let content = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        let fields: Vec<&str> = content.split_whitespace().collect();
        let (domain, address) = match fields.as_slice() {
            [] => continue,
            [_] => return Err(HostsFileError::MissingAddress { line }),
            [domain, address] => (*domain, *address),
            _ => {
                return Err(HostsFileError::TooManyFields {
                    line,
                    fields: fields.len(),
                })
            }
        };

        let address: Ipv4Addr = address
            .parse()
            .map_err(|_| HostsFileError::InvalidAddress {
                line,
                value: address.to_string(),
            })?;

        match builder.insert(domain, address) {
            Ok(()) => {}
            Err(DomainError::DuplicateDomain(domain)) => {
                let first_line = first_seen.get(domain.as_str()).copied().unwrap_or(line);
                return Err(HostsFileError::DuplicateDomain {
                    line,
                    domain,
                    first_line,
                });
            }
            Err(source) => return Err(HostsFileError::InvalidDomain { line, source }),
        }
        first_seen.insert(domain, line);
        debug!(line, domain, address = %address, "Hosts entry");
    }

    Ok(builder.build())
}
