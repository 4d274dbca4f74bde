//! Shared key generation for derived artifacts.
//!
//! Key format: `{deploy_path}/{id}/origin.{ext}` and `{deploy_path}/{id}/thumbnail.{ext}`.

use thumbnailer_core::constants::{ORIGIN_NAME, THUMBNAIL_NAME};
use thumbnailer_core::ContentIdentity;

/// Key of the origin copy. The extension is the one found in the source key.
pub fn origin_key(deploy_path: &str, identity: &ContentIdentity) -> String {
    derived_key(deploy_path, &identity.id, ORIGIN_NAME, &identity.extension)
}

/// Key of the thumbnail for the given (already normalized) extension.
pub fn thumbnail_key(deploy_path: &str, identity: &ContentIdentity, extension: &str) -> String {
    derived_key(deploy_path, &identity.id, THUMBNAIL_NAME, extension)
}

fn derived_key(deploy_path: &str, id: &str, name: &str, extension: &str) -> String {
    format!("{}/{}/{}.{}", deploy_path, id, name, extension)
}
