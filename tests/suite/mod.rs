mod fetch_flow;
