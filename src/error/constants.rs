use super::const_error;

const_error!(
    INTERNAL,
    INTERNAL_SERVER_ERROR,
    "INTERNAL",
    "internal server error"
);
const_error!(
    DATABASE_ERROR,
    INTERNAL_SERVER_ERROR,
    "DATABASE",
    "database error"
);
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "JSON_MISSING_FIELDS",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "JSON_SYNTAX", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "JSON_CONTENT_TYPE",
    "missing or wrong content-type"
);
const_error!(
    VALIDATION_FAILED,
    BAD_REQUEST,
    "VALIDATION",
    "invalid data"
);
const_error!(
    QUERY_SYNTAX_ERROR,
    BAD_REQUEST,
    "QUERY_SYNTAX",
    "invalid query string"
);
const_error!(
    QUERY_VALIDATION_FAILED,
    BAD_REQUEST,
    "QUERY_VALIDATION",
    "invalid query parameters"
);
