use crate::errors::DomainError;

/// Longest label allowed by RFC 1035; larger length bytes are pointer or
/// extended-label markers.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest name in wire form, length bytes and root terminator included.
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// Number of octets `name` occupies as length-prefixed labels plus the root
/// terminator. The empty name is the root and takes one octet.
pub fn wire_len(name: &str) -> usize {
    if name.is_empty() {
        return 1;
    }
    name.split('.').map(|label| label.len() + 1).sum::<usize>() + 1
}

/// Checks that `name` can be written as length-prefixed labels.
///
/// The empty string is the root name and is valid. Otherwise every
/// dot-separated label must be 1..=63 octets and the whole name must fit in
/// 255 wire octets.
pub fn validate(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Ok(());
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName {
                name: name.to_string(),
                reason: "empty label",
            });
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName {
                name: name.to_string(),
                reason: "label longer than 63 octets",
            });
        }
    }

    if wire_len(name) > MAX_NAME_WIRE_LEN {
        return Err(DomainError::InvalidDomainName {
            name: name.to_string(),
            reason: "name longer than 255 octets",
        });
    }

    Ok(())
}
