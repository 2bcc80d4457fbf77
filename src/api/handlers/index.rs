// src/api/handlers/index.rs
use actix_web::HttpResponse;

// The form-based front end. It collects the generation options, posts them to
// /generator/password and renders the result or the validation error.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Passforge</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    fieldset { margin-bottom: 1rem; }
    label { display: block; margin: 0.3rem 0; }
    input[type=text], input[type=number] { width: 14rem; }
    #result { margin-top: 1rem; padding: 0.6rem; display: none; }
    #result.ok { display: block; background: #e6ffe6; }
    #result.err { display: block; background: #ffe6e6; }
    code { font-size: 1.2rem; }
  </style>
</head>
<body>
  <h1>Password Generator</h1>
  <form id="form">
    <fieldset>
      <label>Username (optional, saved with the password):
        <input type="text" name="username">
      </label>
      <label>Length (at least 4):
        <input type="number" name="length" value="16" min="4" max="128">
      </label>
    </fieldset>
    <fieldset>
      <legend>Generation method</legend>
      <label><input type="radio" name="method" value="simple" checked> Simple random generation</label>
      <label><input type="radio" name="method" value="selective"> Select character types</label>
      <label><input type="radio" name="method" value="required"> Specify required characters</label>
    </fieldset>
    <fieldset id="selective">
      <legend>Character types</legend>
      <label><input type="checkbox" name="include_uppercase"> Include uppercase letters</label>
      <label><input type="checkbox" name="include_lowercase"> Include lowercase letters</label>
      <label><input type="checkbox" name="include_digits"> Include digits</label>
      <label><input type="checkbox" name="include_special"> Include special characters</label>
    </fieldset>
    <fieldset id="required">
      <legend>Required characters</legend>
      <label>Uppercase (e.g. ABC): <input type="text" name="req_uppercase"></label>
      <label>Lowercase (e.g. abc): <input type="text" name="req_lowercase"></label>
      <label>Digits (e.g. 123): <input type="text" name="req_digits"></label>
      <label>Special (e.g. !@#): <input type="text" name="req_special"></label>
    </fieldset>
    <button type="submit">Generate Password</button>
  </form>
  <div id="result"></div>
  <script>
    const form = document.getElementById('form');
    const result = document.getElementById('result');

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const data = new FormData(form);
      const body = {
        method: data.get('method'),
        length: parseInt(data.get('length'), 10),
        username: data.get('username') || null,
        include_uppercase: data.has('include_uppercase'),
        include_lowercase: data.has('include_lowercase'),
        include_digits: data.has('include_digits'),
        include_special: data.has('include_special'),
        required: {
          uppercase: data.get('req_uppercase') || '',
          lowercase: data.get('req_lowercase') || '',
          digits: data.get('req_digits') || '',
          special: data.get('req_special') || ''
        }
      };

      const response = await fetch('/generator/password', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body)
      });
      const payload = await response.json();

      if (payload.success) {
        let text = 'Generated password: <code>' +
          payload.password.replace(/&/g, '&amp;').replace(/</g, '&lt;') + '</code>';
        if (payload.saved === true) {
          text += '<br>User saved with ID: ' + payload.record_id;
        } else if (payload.saved === false) {
          text += '<br>Failed to save user record.';
        }
        result.className = 'ok';
        result.innerHTML = text;
      } else {
        result.className = 'err';
        result.textContent = payload.error;
      }
    });
  </script>
</body>
</html>
"#;

/// Serve the password generator form.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
