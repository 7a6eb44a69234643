use super::Topic;

// Declaration order is match order.
pub(super) static TOPICS: [Topic; 6] = [
    Topic {
        id: "pipelines",
        keywords: &["pipeline", "data pipeline", "build pipeline"],
        response: "Data pipelines are the backbone of modern data infrastructure. They automate the flow of data from sources to destinations. Key considerations:\n\n• **Orchestration**: Use tools like Apache Airflow, Prefect, or Dagster for scheduling and monitoring\n• **Scalability**: Design for growth - start with batch, evolve to micro-batch or streaming\n• **Idempotency**: Ensure pipeline runs can be safely retried\n• **Monitoring**: Track data quality, latency, and throughput\n\nWhat's your primary use case - analytics, ML, or real-time processing?",
        quick_replies: &[
            "Analytics pipelines",
            "ML pipelines",
            "Real-time processing",
            "Talk to expert",
        ],
    },
    Topic {
        id: "etl",
        keywords: &["etl", "elt", "transform", "extract", "load"],
        response: "ETL vs ELT - a fundamental architectural choice:\n\n**ETL (Extract-Transform-Load)**\n• Transform data before loading into warehouse\n• Better for complex transformations\n• Tools: Talend, Informatica, Apache NiFi\n\n**ELT (Extract-Load-Transform)**\n• Load raw data first, transform in warehouse\n• Leverages modern warehouse compute (Snowflake, BigQuery)\n• More flexible for ad-hoc analysis\n• Tools: dbt, Fivetran, Stitch\n\nModern architectures often blend both approaches. What's driving your transformation needs?",
        quick_replies: &["ETL tools", "ELT best practices", "Cloud warehouses", "dbt guide"],
    },
    Topic {
        id: "streaming",
        keywords: &["streaming", "real-time", "kafka", "kinesis", "real time"],
        response: "Streaming data processing enables real-time insights and actions:\n\n**Key Technologies**\n• **Apache Kafka**: Industry standard for event streaming\n• **Apache Flink**: Stateful stream processing at scale\n• **Apache Spark Streaming**: Micro-batch processing\n• **AWS Kinesis**: Managed streaming on AWS\n\n**Use Cases**\n• Real-time analytics dashboards\n• Fraud detection\n• IoT sensor processing\n• Change Data Capture (CDC)\n\n**vs Batch**: Streaming for latency-sensitive workloads (<15min), batch for high-volume, cost-effective processing\n\nWhat's your target latency requirement?",
        quick_replies: &[
            "Kafka setup",
            "Batch vs streaming",
            "CDC patterns",
            "Architecture review",
        ],
    },
    Topic {
        id: "cloud",
        keywords: &[
            "aws",
            "gcp",
            "azure",
            "cloud",
            "migration",
            "s3",
            "redshift",
            "snowflake",
            "bigquery",
        ],
        response: "Cloud data platforms - choose based on your ecosystem:\n\n**AWS Data Stack**\n• Storage: S3 (data lake)\n• Warehouse: Redshift\n• Processing: EMR (Spark), Glue (ETL)\n• Streaming: Kinesis, MSK (Kafka)\n\n**GCP Data Stack**\n• Storage: GCS\n• Warehouse: BigQuery (serverless, columnar)\n• Processing: Dataflow (Apache Beam), Dataproc (Spark)\n• Streaming: Pub/Sub, Dataflow\n\n**Azure Data Stack**\n• Storage: ADLS Gen2\n• Warehouse: Synapse Analytics\n• Processing: Databricks, HDInsight\n• Streaming: Event Hubs\n\n**Cloud-Native Warehouses**: Snowflake (multi-cloud), Databricks (unified analytics)\n\nWhat's your current infrastructure?",
        quick_replies: &[
            "AWS migration",
            "Multi-cloud strategy",
            "Cost optimization",
            "Expert consultation",
        ],
    },
    Topic {
        id: "sql",
        keywords: &["sql", "query", "database", "optimization", "optimize"],
        response: "SQL optimization - the foundation of fast analytics:\n\n**Query Optimization**\n• Use EXPLAIN/EXPLAIN ANALYZE to understand plans\n• Filter early (WHERE before JOIN)\n• Index strategically (balance read vs write)\n• Avoid SELECT * in production\n• Use CTEs for readability, subqueries for performance\n\n**Advanced Techniques**\n• Window functions for analytics\n• Partitioning for time-series data\n• Materialized views for repeated aggregations\n• Query result caching\n\n**Modern SQL Features**\n• JSON/array functions (semi-structured data)\n• Approximate aggregations (HyperLogLog)\n• User-defined functions (UDFs)\n\nWhat database engine are you optimizing for?",
        quick_replies: &[
            "PostgreSQL tips",
            "Snowflake SQL",
            "Query debugging",
            "Performance audit",
        ],
    },
    Topic {
        id: "airflow",
        keywords: &["airflow", "orchestration", "workflow", "scheduler"],
        response: "Apache Airflow - the de facto orchestration standard:\n\n**Why Airflow?**\n• DAG-based workflow definition (Python)\n• Rich operator ecosystem (AWS, GCP, Snowflake...)\n• Strong monitoring & alerting\n• Dynamic pipeline generation\n• Active community & support\n\n**Architecture**\n• Scheduler: Triggers tasks based on schedule/dependencies\n• Executor: Runs tasks (Local, Celery, Kubernetes)\n• Metadata DB: Stores state (Postgres recommended)\n• Web UI: Monitor & troubleshoot\n\n**Alternatives**: Prefect (modern Python), Dagster (data-aware), Temporal (workflow engine)\n\nNeed help setting up Airflow or migrating to Astronomer?",
        quick_replies: &["Airflow setup", "Best practices", "Alternatives", "Migration help"],
    },
];

pub(super) static FALLBACK: Topic = Topic {
    id: "default",
    keywords: &[],
    response: "That's an interesting question about data engineering! While I don't have a specific answer for that, our team of experts can definitely help. Would you like to:\n\n• Explore our documentation\n• Browse common topics (pipelines, streaming, cloud)\n• Connect with a data engineer\n\nWhat would be most helpful?",
    quick_replies: &["Browse topics", "Talk to expert", "Documentation"],
};
