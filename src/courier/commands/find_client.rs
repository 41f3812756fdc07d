use crate::commands::{counted, CmdMessage, CmdResult, DisplayClient};
use crate::error::Result;
use crate::model::{Book, ClientQuery};

pub fn run(book: &Book, query: &ClientQuery) -> Result<CmdResult> {
    let clients: Vec<DisplayClient> = book
        .clients_matching(|client| query.matches(client))
        .into_iter()
        .map(|(position, client)| DisplayClient {
            position,
            client: client.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} found",
        counted(clients.len(), "client", "clients")
    )));
    Ok(result.with_clients(clients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_book;

    #[test]
    fn finds_by_name_substring() {
        let book = sample_book();
        let query = ClientQuery {
            name: Some("yeoh".to_string()),
            ..Default::default()
        };

        let result = run(&book, &query).unwrap();

        assert_eq!(result.clients.len(), 1);
        assert_eq!(result.clients[0].position, 1);
        assert!(result.messages[0].content.contains("1 client found"));
        assert!(!result.mutated);
    }

    #[test]
    fn positions_reflect_book_order() {
        let book = sample_book();
        // Every sample client has an "e" somewhere in their name.
        let query = ClientQuery {
            name: Some("e".to_string()),
            ..Default::default()
        };

        let result = run(&book, &query).unwrap();
        let positions: Vec<usize> = result.clients.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let book = sample_book();
        let query = ClientQuery {
            name: Some("yu".to_string()),
            phone: Some("9927".to_string()),
            ..Default::default()
        };
        assert_eq!(run(&book, &query).unwrap().clients.len(), 1);

        let mismatched = ClientQuery {
            name: Some("yu".to_string()),
            phone: Some("8743".to_string()),
            ..Default::default()
        };
        let result = run(&book, &mismatched).unwrap();
        assert!(result.clients.is_empty());
        assert!(result.messages[0].content.contains("0 clients found"));
    }
}
