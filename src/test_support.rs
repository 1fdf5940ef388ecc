// src/test_support.rs
// Local throwaway servers used by the async tests.
use axum::Router;
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{}/", addr)
}

/// A URL on a localhost port that nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{}/", addr)
}

/// Minimal upstream page carrying every marker the extractors look for.
pub const FULL_PAGE: &str = r#"
<!DOCTYPE html>
<html><head><title>Ministry page</title></head><body>
  <div class="header-section">
    <div class="site-meta">
      <span>Helpline Number : +91-11-23978046</span>
    </div>
    <div class="site-meta">
      <span>Toll Free : 1075</span>
    </div>
    <div class="site-meta">
      <span>Helpline Email ID : ncov2019@gov.in</span>
    </div>
    <div class="site-meta"><span>Other Languages</span></div>
    <span class="blinking"><strong>Technical queries: <a href="mailto:tech@gov.in">tech@gov.in</a></strong></span>
  </div>
  <div class="fullbol">
    <span class="coviddata">1,23,45,678</span> Total Vaccination
  </div>
  <div class="site-stats-count">
    <ul>
      <li class="bg-blue">
        <strong class="mob-hide">Active</strong>
        <strong class="mob-hide">123 (New)</strong>
      </li>
      <li class="bg-green">
        <strong class="mob-hide">Discharged</strong>
        <strong class="mob-hide">4567 </strong>
      </li>
      <li class="bg-red">
        <strong class="mob-hide">Deaths</strong>
        <strong class="mob-hide">89 increase</strong>
      </li>
      <li class="bg-orange">
        <strong class="mob-hide">Migrated</strong>
        <strong class="mob-hide">1</strong>
      </li>
    </ul>
  </div>
  <div class="data-table">
    <table>
      <thead><tr><th>S. No.</th><th>Name of State / UT</th><th>Active</th><th>Cured</th><th>Deaths</th><th>Total</th></tr></thead>
      <tbody>
        <tr><td>1</td><td>Kerala</td><td>10</td><td>20</td><td>3</td><td>33</td></tr>
        <tr><td>2</td><td>Goa</td><td>4</td><td>5</td><td>0</td><td>9</td></tr>
        <tr><td>3</td><td>Delhi</td><td>7</td><td>70</td><td>1</td><td>78</td></tr>
        <tr><td colspan="2">Total#</td><td>21</td><td>95</td><td>4</td><td>120</td></tr>
        <tr><td colspan="6">Cases being reassigned to states</td></tr>
        <tr><td colspan="6">*Including foreign nationals</td></tr>
        <tr><td colspan="6">#States wise distribution is subject to verification</td></tr>
        <tr><td colspan="6">Data source: state reports</td></tr>
        <tr><td colspan="6">Updated daily</td></tr>
      </tbody>
    </table>
  </div>
</body></html>
"#;

/// Case-count block in the `Direct` layout: `span` captions, one `strong` count.
pub const DIRECT_PAGE: &str = r#"
<!DOCTYPE html>
<html><body>
  <ul class="decorative">
    <li class="bg-blue"><strong class="mob-hide">999</strong></li>
  </ul>
  <div class="site-stats-count">
    <ul>
      <li class="bg-blue"><span class="mob-hide">Active</span><strong class="mob-hide">2,345 (New)</strong></li>
      <li class="bg-green"><span class="mob-hide">Discharged</span><strong class="mob-hide">6789</strong></li>
      <li class="bg-red"><span class="mob-hide">Deaths</span><strong class="mob-hide"> 12 </strong></li>
      <li class="bg-orange"><span class="mob-hide">Migrated</span><strong class="mob-hide">3</strong></li>
    </ul>
  </div>
</body></html>
"#;
