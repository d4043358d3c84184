use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new() {
        let user_id = UserId::new();
        let uuid = user_id.as_uuid();
        assert_eq!(uuid.get_version_num(), 4); // UUIDv4
    }

    #[test]
    fn test_parse_round_trips_display() {
        let user_id = UserId::new();
        let parsed: UserId = user_id.to_string().parse().unwrap();
        assert_eq!(parsed, user_id);
    }

    #[test]
    fn test_parse_rejects_non_uuid() {
        assert!("bob".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }
}
