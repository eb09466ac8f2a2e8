mod api_json;
