// Flat request body → store `fields` mapping

use crate::models::{AdFields, AdInput, EventFields, EventInput, ImageAttachment};

/// Fields for a new event. `record_id` becomes the `ID` column.
pub fn map_event_create(input: EventInput, record_id: String) -> EventFields {
    EventFields {
        id: Some(record_id),
        ..map_event_patch(input)
    }
}

/// Fields for a partial event update; only supplied columns are sent
pub fn map_event_patch(input: EventInput) -> EventFields {
    EventFields {
        id: None,
        title: input.title,
        kind: input.kind,
        date: input.date,
        location: input.location,
        description: input.description,
        image: ImageAttachment::wrap(input.image_url),
    }
}

pub fn map_ad_create(input: AdInput, record_id: String) -> AdFields {
    AdFields {
        id: Some(record_id),
        title: input.title,
        description: input.description,
        link: input.link,
        image: ImageAttachment::wrap(input.image_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn picnic() -> EventInput {
        serde_json::from_value(json!({
            "userId": 42,
            "title": "Picnic",
            "type": "social",
            "date": "2024-06-01",
            "location": "Park",
            "description": "Fun",
            "imageUrl": "http://x/y.jpg"
        }))
        .unwrap()
    }

    #[test]
    fn test_map_event_create() {
        let fields = map_event_create(picnic(), "123456".to_string());
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({
                "ID": "123456",
                "Title": "Picnic",
                "Type": "social",
                "Date": "2024-06-01",
                "Location": "Park",
                "Description": "Fun",
                "Image": [{"url": "http://x/y.jpg"}]
            })
        );
    }

    #[test]
    fn test_map_event_patch_only_sends_supplied_fields() {
        let input: EventInput =
            serde_json::from_value(json!({"userId": 42, "title": "Renamed"})).unwrap();
        let fields = map_event_patch(input);
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"Title": "Renamed"})
        );
    }

    #[test]
    fn test_non_string_columns_pass_through() {
        let input: EventInput = serde_json::from_value(json!({
            "userId": 42,
            "date": 20240601,
            "location": {"lat": 55.75, "lng": 37.61}
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(map_event_patch(input)).unwrap(),
            json!({"Date": 20240601, "Location": {"lat": 55.75, "lng": 37.61}})
        );
    }

    #[test]
    fn test_map_ad_create() {
        let input: AdInput = serde_json::from_value(json!({
            "userId": "42",
            "title": "Bakery",
            "description": "Fresh bread",
            "link": "https://bakery.example",
            "imageUrl": "https://i.example/bread.jpg"
        }))
        .unwrap();

        let value = serde_json::to_value(map_ad_create(input, "7".to_string())).unwrap();
        assert_eq!(value["ID"], "7");
        assert_eq!(value["Link"], "https://bakery.example");
        assert_eq!(value["Image"], json!([{"url": "https://i.example/bread.jpg"}]));
        assert!(value.get("userId").is_none());
    }
}
