string_enum! {
    /// Type of the value a filter compares against
    FieldType {
        Boolean => "BOOLEAN",
        Timestamp => "TIMESTAMP",
        Number => "NUMBER",
        Integer => "INTEGER",
        String => "STRING",
    }
}

string_enum! {
    /// Comparison applied by a filter parameter
    Operation {
        LessThan => "LESS_THAN",
        LessThanOrEqualTo => "LESS_THAN_OR_EQUAL_TO",
        Equal => "EQUAL",
        GreaterThan => "GREATER_THAN",
        GreaterThanOrEqualTo => "GREATER_THAN_OR_EQUAL_TO",
        /// Field value is one of a list
        In => "IN",
        /// Field value contains a substring
        Contains => "CONTAINS",
    }
}

string_enum! {
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}
