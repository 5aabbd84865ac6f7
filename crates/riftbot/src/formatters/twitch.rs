//! Trending Streams Formatter
//!
//! HTML flavored; the dispatcher flags the reply to disable link previews so
//! a list of channel links stays a list.

use crate::domain::StreamEntry;

pub fn format(streams: &[StreamEntry]) -> String {
    let mut out = String::from("<b>Top League Streams</b>\n");
    for stream in streams {
        out.push_str(&format!(
            "<a href=\"{}\">{}</a> - {} ({} viewers)\n",
            stream.url, stream.channel, stream.status, stream.viewers
        ));
    }
    out
}
