use crate::models::permission::LEVEL_OWN_ONLY;
use crate::models::user::User;

use super::types::Document;

/// Whether `user` may see `doc` at all, ignoring its status.
pub fn can_view(user: &User, doc: &Document) -> bool {
    user.permissions != LEVEL_OWN_ONLY || doc.user_id == user.id
}

/// Narrow an active-document set to what `user` may see.
///
/// Users at the lowest level only get their own documents; every other
/// level gets the set unchanged.
pub fn visible_to(user: &User, documents: Vec<Document>) -> Vec<Document> {
    if user.permissions == LEVEL_OWN_ONLY {
        documents.into_iter().filter(|d| d.user_id == user.id).collect()
    } else {
        documents
    }
}
