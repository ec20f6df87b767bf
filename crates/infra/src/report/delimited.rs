use csv::{Terminator, Writer, WriterBuilder};
use ordstats_domain::{ComparisonTable, RankedStatSet};
use ordstats_shared_kernel::{InfraResult, InfrastructureError, RankedStat, format_real};

/// Column names of a ranked statistics report, also used per comparison group.
pub const STATISTICS_HEADER: [&str; 5] =
    ["Ranking", "TransactionName", "ORDthreshold", "TransactionCount", "AvgTransactionResponse"];

/// Empty column between two comparison groups.
pub const COMPARISON_SPACER: &str = "";

const GROUP_WIDTH: usize = STATISTICS_HEADER.len();

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn csv_error(err: impl std::fmt::Display) -> InfrastructureError {
    InfrastructureError::SerializationError { format: "CSV".to_string(), details: err.to_string() }
}

fn finish(writer: Writer<Vec<u8>>) -> InfraResult<Vec<u8>> {
    writer.into_inner().map_err(csv_error)
}

fn stat_fields(entry: &RankedStat) -> [String; GROUP_WIDTH] {
    [
        entry.ranking.to_string(),
        entry.stat.transaction_name.clone(),
        format_real(entry.stat.avg_ord_threshold),
        entry.stat.transaction_count.to_string(),
        format_real(entry.stat.avg_response_time),
    ]
}

/// `Ranking,TransactionName,ORDthreshold,TransactionCount,AvgTransactionResponse`
/// followed by one row per entry in ranked order.
pub fn encode_statistics(stats: &RankedStatSet) -> InfraResult<Vec<u8>> {
    let mut out = writer();
    out.write_record(STATISTICS_HEADER).map_err(csv_error)?;
    for entry in stats {
        out.write_record(stat_fields(entry)).map_err(csv_error)?;
    }
    finish(out)
}

/// Two header lines (labels, then the column names of every group) followed
/// by one line per comparison row. Groups are five columns wide and separated
/// by a single spacer column; a set without a match leaves its group blank.
pub fn encode_comparison(table: &ComparisonTable) -> InfraResult<Vec<u8>> {
    let mut out = writer();

    let labels = grouped(table.labels.iter().map(|label| {
        let mut group = vec![String::new(); GROUP_WIDTH];
        group[0] = label.clone();
        group
    }));
    out.write_record(&labels).map_err(csv_error)?;

    let header = grouped((0..table.group_count()).map(|_| STATISTICS_HEADER.map(String::from).to_vec()));
    out.write_record(&header).map_err(csv_error)?;

    for row in &table.rows {
        let fields = grouped(row.columns.iter().map(|column| match column {
            Some(entry) => stat_fields(entry).to_vec(),
            None => vec![String::new(); GROUP_WIDTH],
        }));
        out.write_record(&fields).map_err(csv_error)?;
    }

    finish(out)
}

fn grouped(groups: impl Iterator<Item = Vec<String>>) -> Vec<String> {
    let mut fields = Vec::new();
    for (index, group) in groups.enumerate() {
        if index > 0 {
            fields.push(COMPARISON_SPACER.to_string());
        }
        fields.extend(group);
    }
    fields
}
