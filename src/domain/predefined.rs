/// A canned example query offered in the Predefined pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedQuery {
    pub id: &'static str,
    pub query: &'static str,
}

pub static PREDEFINED_QUERIES: [PredefinedQuery; 4] = [
    PredefinedQuery {
        id: "employees",
        query: "SELECT * FROM Employees;",
    },
    PredefinedQuery {
        id: "products",
        query: "SELECT ProductName, Price FROM Products WHERE Price > 50;",
    },
    PredefinedQuery {
        id: "orders",
        query: "SELECT OrderID, CustomerName, OrderDate FROM Orders LIMIT 5;",
    },
    PredefinedQuery {
        id: "largeData",
        query: "SELECT * FROM Large_Data_Table;",
    },
];

impl PredefinedQuery {
    pub fn find(id: &str) -> Option<&'static Self> {
        PREDEFINED_QUERIES.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_known_query() {
        let found = PredefinedQuery::find("employees").unwrap();

        assert_eq!(found.query, "SELECT * FROM Employees;");
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        assert!(PredefinedQuery::find("customers").is_none());
    }
}
